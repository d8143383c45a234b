#![allow(dead_code)]

use pizzeria::config::{
    DisplayConfig, ServerConfig, Settings, UpstreamConfig, DEFAULT_ITEMS_PATH,
    DEFAULT_PLACEHOLDER_IMAGE,
};

pub fn settings_for(base_url: &str) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_rate_limit: 100,
            max_request_body_size: 1048576,
        },
        upstream: UpstreamConfig {
            base_url: base_url.to_string(),
            items_path: DEFAULT_ITEMS_PATH.to_string(),
            timeout_seconds: 5,
            user_agent: "pizzeria-test".to_string(),
        },
        display: DisplayConfig {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            swagger_url: format!("{base_url}/swagger/"),
        },
    }
}

pub const PIZZA_LIST: &str = r#"[
    {"id": 1, "name": "Margherita", "description": "Paradicsom, mozzarella", "price": 1990, "image": "/img/1.jpg"},
    {"pizza_id": "songoku", "nev": "Songoku", "leiras": "Sonka, gomba, kukorica", "ar": "2490", "kep": {"url": "https://cdn.example.com/s.png"}},
    {"_id": 3, "title": "Frutti di mare", "price": 0}
]"#;
