//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn website() -> String {
        "".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "src/content".into()
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub fn layout() -> String {
        "@layouts/post.astro".into()
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }

        pub fn stylesheet() -> String {
            "sitemap.xsl".into()
        }
    }
}

// ============================================================================
// [weekly] Section Defaults
// ============================================================================

pub mod weekly {
    pub fn repo() -> String {
        "dxzyw/weekly".into()
    }

    pub fn start_date() -> String {
        "2025-04-07".into()
    }

    pub fn asset_url() -> String {
        "https://herotops.xyz/assets".into()
    }
}
