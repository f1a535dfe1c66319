//! Contact configuration shared by every call-to-action on the page.

/// WhatsApp number all CTAs point at, E.164 without the leading plus.
pub const PHONE_NUMBER: &str = "573217091411";

pub const NAV_CTA_MESSAGE: &str = "Hola 👋 Me gustaría saber más sobre Barber Pro.";
pub const HERO_CTA_MESSAGE: &str = "Hola 👋 Me gustaría ver una demostración en mi celular.";
pub const DEMO_CTA_MESSAGE: &str = "Hola 👋 Quiero ver una demostración de Barber Pro.";
pub const FLOATING_CTA_MESSAGE: &str = "Hola 👋 Tengo una consulta sobre Barber Pro.";
pub const WIDGET_CTA_MESSAGE: &str = "Hola, quiero ver cómo funcionaría en mi negocio.";

/// Deep link that opens a chat with the shop's number and a pre-filled
/// message. api.whatsapp.com handles handsets better than wa.me.
pub fn whatsapp_link(message: &str) -> String {
    format!(
        "https://api.whatsapp.com/send?phone={}&text={}",
        PHONE_NUMBER,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_targets_the_send_endpoint() {
        let link = whatsapp_link("hola");
        assert!(link.starts_with("https://api.whatsapp.com/send?phone="));
    }

    #[test]
    fn link_carries_the_fixed_phone_number() {
        for message in [
            NAV_CTA_MESSAGE,
            HERO_CTA_MESSAGE,
            DEMO_CTA_MESSAGE,
            FLOATING_CTA_MESSAGE,
            WIDGET_CTA_MESSAGE,
        ] {
            assert!(whatsapp_link(message).contains(PHONE_NUMBER));
        }
    }

    #[test]
    fn widget_cta_text_is_url_encoded() {
        let link = whatsapp_link(WIDGET_CTA_MESSAGE);
        assert!(link.ends_with(
            "&text=Hola%2C%20quiero%20ver%20c%C3%B3mo%20funcionar%C3%ADa%20en%20mi%20negocio."
        ));
        // The raw message must never leak into the query string unencoded.
        assert!(!link.contains(' '));
    }
}
