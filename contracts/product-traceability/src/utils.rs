use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Derive the 32-byte trace code printed on a product's label.
///
/// Mixes the product ID, the registering farmer and the current ledger
/// position, so two products never share a code.
pub fn generate_trace_code(env: &Env, product_id: u64, farmer: &Address) -> BytesN<32> {
    let mut combined = Bytes::new(env);

    combined.append(&Bytes::from_array(env, &product_id.to_be_bytes()));
    combined.append(&farmer.clone().to_xdr(env));
    combined.append(&Bytes::from_array(
        env,
        &env.ledger().timestamp().to_be_bytes(),
    ));
    combined.append(&Bytes::from_array(
        env,
        &env.ledger().sequence().to_be_bytes(),
    ));

    env.crypto().sha256(&combined).into()
}

/// Quality scores are percentages
pub fn is_valid_quality_score(score: u32) -> bool {
    score <= 100
}
