use quad9_doh_domain::DnsResponse;

pub fn print_response(response: &DnsResponse) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
