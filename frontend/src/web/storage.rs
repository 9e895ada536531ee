//! Web Storage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的存储接口：
//! refresh token 放在 localStorage，引导通行证放在 sessionStorage（只在当前标签页有效）。

use dietchef::PassStore;
use dietchef::firebase::TokenPersistence;

const REFRESH_TOKEN_KEY: &str = "dietchef_refresh_token";
const ENTRY_PASS_KEY: &str = "dietchef_entry_pass";

/// 存储操作封装
#[derive(Debug, Clone, Copy)]
pub enum WebStorage {
    Local,
    Session,
}

impl WebStorage {
    fn storage(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self {
            WebStorage::Local => window.local_storage().ok()?,
            WebStorage::Session => window.session_storage().ok()?,
        }
    }

    /// 键不存在或发生错误时返回 `None`
    pub fn get(self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    pub fn set(self, key: &str, value: &str) -> bool {
        self.storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    pub fn delete(self, key: &str) -> bool {
        self.storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// 刷新页面后恢复会话
pub struct RefreshTokenStore;

impl TokenPersistence for RefreshTokenStore {
    fn load(&self) -> Option<String> {
        WebStorage::Local.get(REFRESH_TOKEN_KEY)
    }

    fn save(&self, refresh_token: &str) {
        if !WebStorage::Local.set(REFRESH_TOKEN_KEY, refresh_token) {
            tracing::warn!("cannot persist session, it will not survive a reload");
        }
    }

    fn clear(&self) {
        WebStorage::Local.delete(REFRESH_TOKEN_KEY);
    }
}

/// 在引导中途页面刷新后保留通行证
pub struct EntryPassStore;

impl PassStore for EntryPassStore {
    fn load(&self) -> Option<String> {
        WebStorage::Session.get(ENTRY_PASS_KEY)
    }

    fn save(&self, encoded: &str) {
        if !WebStorage::Session.set(ENTRY_PASS_KEY, encoded) {
            tracing::warn!("cannot persist entry pass, a reload will return to the home page");
        }
    }

    fn clear(&self) {
        WebStorage::Session.delete(ENTRY_PASS_KEY);
    }
}
