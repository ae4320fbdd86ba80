use toon_core::consts::ConstKind;

use super::ApiClient;
use crate::cache::{CacheKey, Entity};
use crate::error::ClientResult;

pub fn const_key(kind: ConstKind) -> CacheKey {
    CacheKey::new(Entity::Const, format!("/consts/{kind}"))
}

impl ApiClient {
    /// `GET /consts/{kind}`: the plain-text body.
    pub async fn const_text(&self, kind: ConstKind) -> ClientResult<String> {
        self.get_text(&format!("/consts/{kind}")).await
    }
}
