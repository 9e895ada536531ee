//! 编译期配置
//!
//! 浏览器没有进程环境变量，配置项在构建时通过 `option_env!` 写入。

use dietchef::config::{
    KEY_API_KEY, KEY_AUTH_DOMAIN, KEY_DATABASE_URL, KEY_GOOGLE_CLIENT_ID, KEY_IDENTITY_ENDPOINT,
    KEY_PROJECT_ID, KEY_TOKEN_ENDPOINT,
};
use dietchef::{FirebaseConfig, OnboardResult};

fn compiled(key: &str) -> Option<String> {
    let value = match key {
        KEY_API_KEY => option_env!("DIETCHEF_FIREBASE_API_KEY"),
        KEY_PROJECT_ID => option_env!("DIETCHEF_FIREBASE_PROJECT_ID"),
        KEY_DATABASE_URL => option_env!("DIETCHEF_FIREBASE_DATABASE_URL"),
        KEY_AUTH_DOMAIN => option_env!("DIETCHEF_FIREBASE_AUTH_DOMAIN"),
        KEY_GOOGLE_CLIENT_ID => option_env!("DIETCHEF_GOOGLE_CLIENT_ID"),
        KEY_IDENTITY_ENDPOINT => option_env!("DIETCHEF_IDENTITY_ENDPOINT"),
        KEY_TOKEN_ENDPOINT => option_env!("DIETCHEF_TOKEN_ENDPOINT"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn load() -> OnboardResult<FirebaseConfig> {
    FirebaseConfig::from_lookup(compiled)
}
