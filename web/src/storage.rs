use gloo_storage::{LocalStorage, Storage};
use map_core::{consent::CONSENT_STORAGE_KEY, Consent};

/// Values are stored as plain strings, not JSON.
pub fn load_consent() -> Option<Consent> {
    match LocalStorage::raw().get_item(CONSENT_STORAGE_KEY) {
        Ok(Some(value)) => value
            .parse()
            .inspect_err(|err| log::warn!("Ignoring stored consent: {err}"))
            .ok(),
        Ok(None) => None,
        Err(err) => {
            log::warn!("Unable to read consent: {err:?}");
            None
        }
    }
}

pub fn store_consent(consent: Consent) {
    log::debug!("Store consent: {consent}");
    if let Err(err) = LocalStorage::raw().set_item(CONSENT_STORAGE_KEY, consent.as_str()) {
        log::warn!("Unable to store consent: {err:?}");
    }
}
