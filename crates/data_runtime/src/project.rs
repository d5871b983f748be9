//! Project manifest schema.

use serde::Deserialize;
use std::path::PathBuf;

/// One exhibit project: a textured slate plus an optional outbound link.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSpec {
    pub name: String,
    pub texture: PathBuf,
    #[serde(default)]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_optional() {
        let json = r#"[
            {"name": "alpha", "texture": "assets/projects/alpha.png"},
            {"name": "beta", "texture": "assets/projects/beta.png", "link": "https://example.com/beta"}
        ]"#;
        let specs: Vec<ProjectSpec> = serde_json::from_str(json).expect("parse");
        assert_eq!(specs.len(), 2);
        assert!(specs[0].link.is_none());
        assert_eq!(specs[1].link.as_deref(), Some("https://example.com/beta"));
    }
}
