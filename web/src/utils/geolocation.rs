//! Browser geolocation lookup for the "Get My Location" button.

use shared_types::Coordinate;

pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;

/// Asks the browser for a fresh, high-accuracy fix. Exactly one of the
/// callbacks runs, possibly much later.
pub fn request_current_position<S, E>(on_success: S, on_error: E)
where
    S: FnOnce(Coordinate) + 'static,
    E: FnOnce(String) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok())
        else {
            on_error("Geolocation not supported".to_string());
            return;
        };

        let success = Closure::once(move |position: web_sys::Position| {
            let coords = position.coords();
            on_success(Coordinate::new(coords.latitude(), coords.longitude()));
        });
        let failure = Closure::once(move |_err: JsValue| {
            on_error("Location permission denied. Using default location.".to_string());
        });

        let options = web_sys::PositionOptions::new();
        options.set_enable_high_accuracy(true);
        options.set_timeout(GEOLOCATION_TIMEOUT_MS);
        options.set_maximum_age(0);

        if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
            success.as_ref().unchecked_ref(),
            Some(failure.as_ref().unchecked_ref()),
            &options,
        ) {
            leptos::logging::error!("getCurrentPosition failed: {:?}", err);
        }

        // The browser owns the callbacks from here on.
        success.forget();
        failure.forget();
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_success;
        on_error("Geolocation is only available in the browser".to_string());
    }
}
