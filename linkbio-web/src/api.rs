use once_cell::unsync::OnceCell;
use shared::client::PhotoWorksClient;
use std::rc::Rc;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<Rc<PhotoWorksClient>> = const { OnceCell::new() };
}

/// Page-wide photo-works client.
///
/// One instance lives as long as the wasm module, i.e. one page load, so its
/// once-only guard holds even if the profile page is mounted again.
pub fn shared() -> Rc<PhotoWorksClient> {
    SHARED_CLIENT.with(|cell| {
        Rc::clone(cell.get_or_init(|| {
            let config = FrontendConfig::new();
            log::debug!("photo works client configured: {:?}", config);
            Rc::new(PhotoWorksClient::new(config.content_source()))
        }))
    })
}
