use actix_web_security_headers::{
    ContentTypeOptionsExt, CspError, FrameOptionsExt, HeadersSettings, ResponseHeadersBuilder,
};

fn main() -> Result<(), CspError> {
    println!("Actix Web Security Headers Example");

    let headers = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| CspError::ConfigError(format!("{}: {}", path, e)))?;
            HeadersSettings::from_json(&json)?.to_headers()?
        }
        None => {
            let mut builder = ResponseHeadersBuilder::new();
            builder
                .content_security_policy(|csp| {
                    csp.default_src().allow_from_self()?;
                    csp.script_src().allow_from_self()?.allow_inline()?;
                    csp.style_src().allow_from_self()?.allow_inline()?;
                    csp.img_src().allow_from_self()?.allow_from_scheme("data:")?;
                    csp.object_src().disallow_all()?;
                    Ok(())
                })?
                .prevent_framing()
                .prevent_content_type_sniffing();
            builder.build()?
        }
    };

    for (name, value) in headers.iter() {
        println!("{}: {}", name.as_str(), value.to_str().unwrap_or("<non-ascii>"));
    }

    Ok(())
}
