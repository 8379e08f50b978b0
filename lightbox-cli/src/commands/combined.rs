use anyhow::Result;
use lightbox::{CombinedLookup, CombinedParams, MappedResponse};
use serde_json::json;

use super::Upstream;

pub async fn run(upstream: Upstream, params: CombinedParams, json: bool) -> Result<()> {
    let client = upstream.client()?;

    let mapped = MappedResponse::from(client.lookup(&params).await);

    // Output result
    println!("{}", render(&mapped, json)?);

    if !mapped.is_success() {
        anyhow::bail!("Lookup failed with status {}", mapped.status);
    }

    Ok(())
}

fn render(mapped: &MappedResponse, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(
            &json!({"status": mapped.status, "body": mapped.body}),
        )?)
    } else {
        Ok(format!(
            "{}\n{}",
            mapped.status,
            serde_json::to_string_pretty(&mapped.body)?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbox::map_lookup_result;

    #[test]
    fn test_render_json() {
        let mapped = map_lookup_result(serde_json::Map::new(), 503);
        let out = render(&mapped, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!({"status": 503, "body": {"detail": "Error"}}));
    }

    #[test]
    fn test_render_plain() {
        let payload = json!({"results": []}).as_object().cloned().unwrap();
        let mapped = map_lookup_result(payload, 200);
        let out = render(&mapped, false).unwrap();
        assert!(out.starts_with("200\n"));
        assert!(out.contains("\"results\": []"));
    }
}
