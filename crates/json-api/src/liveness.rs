//! Liveness Handler

use salvo::prelude::*;

pub(crate) const LIVENESS_MESSAGE: &str = "Server is running.";

/// Plain-text liveness probe.
#[handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Text::Plain(LIVENESS_MESSAGE));
}
