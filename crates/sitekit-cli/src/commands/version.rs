use miette::Result;
use sitekit_core::version::{version_string, VERSION};

pub fn run(json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::json!({ "name": "sitekit", "version": VERSION })
        );
    } else {
        println!("{}", version_string());
    }
    Ok(())
}
