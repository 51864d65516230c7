//! User-facing error notification.

use bloomline_shapes::DecorateError;

/// Text shown to the user for a failed submission.
///
/// Remote failures show the service's body verbatim; everything else
/// uses the error's own message.
#[must_use]
pub fn message(err: &DecorateError) -> String {
    err.to_string()
}

/// Log a failed submission and show it in a blocking alert.
pub fn report(err: &DecorateError) {
    let text = message(err);
    log::error!("decoration failed: {text}");
    if let Some(window) = web_sys::window()
        && let Err(e) = window.alert_with_message(&text)
    {
        log::warn!("could not show alert: {e:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_custom_shape_message() {
        assert_eq!(
            message(&DecorateError::InvalidCustomShape),
            "Invalid JSON in custom shape data"
        );
    }

    #[test]
    fn remote_message_is_body_text() {
        assert_eq!(
            message(&DecorateError::Remote("server overload".into())),
            "server overload"
        );
    }
}
