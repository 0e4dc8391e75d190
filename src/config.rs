/// Default base URL of the server under measurement.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8082";

/// Asset paths served by the collaborator server, in declared order.
///
/// Each pass requests these in reverse: `/index.html` goes out first and the
/// font files last, mirroring the order a browser would discover them in.
pub const DEFAULT_ASSET_PATHS: [&str; 15] = [
    "/assets/fonts/fontawesome-webfont.ttf",
    "/assets/fonts/fontawesome-webfont.woff",
    "/assets/fonts/fontawesome-webfont.woff2",
    "/images/bg.jpg",
    "/images/overlay.png",
    "/images/pic03.jpg",
    "/assets/css/font-awesome.min.css",
    "/images/pic02.jpg",
    "/assets/js/main.js",
    "/assets/js/util.js",
    "/assets/js/skel.min.js",
    "/assets/js/jquery.min.js",
    "/images/pic01.jpg",
    "/assets/css/main.css",
    "/index.html",
];

/// Configuration for benchmark execution
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Base URL each asset path is appended to.
    pub base_url: String,
    /// Number of passes over the asset list.
    pub passes: u32,
    /// Print aggregate statistics after the final pass.
    pub summary: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            passes: 1,
            summary: false,
        }
    }
}

impl BenchmarkConfig {
    /// Full request URLs in the order they are issued within a pass: the
    /// declared asset list reversed, each path appended to the base URL.
    pub fn request_urls(&self) -> Vec<String> {
        DEFAULT_ASSET_PATHS
            .iter()
            .rev()
            .map(|path| format!("{}{}", self.base_url, path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.base_url, "http://localhost:8082");
        assert_eq!(config.passes, 1);
        assert!(!config.summary);
    }

    #[test]
    fn test_request_urls_traversal_order() {
        let config = BenchmarkConfig::default();
        let urls = config.request_urls();

        assert_eq!(urls.len(), 15);
        assert_eq!(urls.first().unwrap(), "http://localhost:8082/index.html");
        assert_eq!(
            urls.last().unwrap(),
            "http://localhost:8082/assets/fonts/fontawesome-webfont.ttf"
        );
    }

    #[test]
    fn test_request_urls_concatenate_base_and_path() {
        let config = BenchmarkConfig {
            base_url: "http://127.0.0.1:9000".to_string(),
            ..Default::default()
        };
        let urls = config.request_urls();

        for (url, path) in urls.iter().zip(DEFAULT_ASSET_PATHS.iter().rev()) {
            assert_eq!(url, &format!("http://127.0.0.1:9000{}", path));
        }
    }
}
