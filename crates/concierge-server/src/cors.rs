use http::Method;
use http::header::{HeaderName, HeaderValue};
use concierge_config::{CorsConfig, OriginSet};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
///
/// The permitted frontend origin arrives here via config; invalid
/// entries are dropped rather than failing startup. Wildcards cannot
/// be combined with credentials, so when credentials are enabled a
/// wildcard falls back to mirroring the request.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    layer = match &config.origins {
        OriginSet::Any if config.credentials => layer.allow_origin(AllowOrigin::mirror_request()),
        OriginSet::Any => layer.allow_origin(AllowOrigin::any()),
        OriginSet::List(origins) => {
            let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            layer.allow_origin(origins)
        }
    };

    layer = match &config.methods {
        OriginSet::Any if config.credentials => layer.allow_methods(AllowMethods::mirror_request()),
        OriginSet::Any => layer.allow_methods(AllowMethods::any()),
        OriginSet::List(methods) => {
            let methods: Vec<Method> = methods.iter().filter_map(|m| m.parse().ok()).collect();
            layer.allow_methods(methods)
        }
    };

    layer = match &config.headers {
        OriginSet::Any if config.credentials => layer.allow_headers(AllowHeaders::mirror_request()),
        OriginSet::Any => layer.allow_headers(AllowHeaders::any()),
        OriginSet::List(headers) => {
            let headers: Vec<HeaderName> = headers.iter().filter_map(|h| h.parse().ok()).collect();
            layer.allow_headers(headers)
        }
    };

    if config.credentials {
        layer = layer.allow_credentials(true);
    }

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}
