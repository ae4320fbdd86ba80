//! Handler for the static consts.

use toon_core::consts::ConstKind;

use crate::constants;

/// GET /api/v1/consts/{id}
///
/// Responds `200 text/plain; charset=utf-8` with the text for `kind`.
pub async fn get_const(kind: ConstKind) -> &'static str {
    constants::text(kind)
}
