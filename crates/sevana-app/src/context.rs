//! The typed selected-entity slot
//!
//! Screens that share no other data channel hand records to one another
//! by attaching a payload to a navigation. The slot is a tagged union:
//! the destination reads it through the accessor for the variant it
//! expects, and a mismatch is a payload-contract violation the
//! dispatcher surfaces as its fallback view.

use serde::{Deserialize, Serialize};

use sevana_core::domain::{
    Assignment, Beautician, Booking, BookingDraft, Category, ChatPeer, Offer, Order,
    PaymentRequest, Salon, Therapist, VendorSignupDraft,
};

/// One navigation payload. Exactly one slot exists on the session;
/// attaching a new payload overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScreenContext {
    Salon(Salon),
    Category(Category),
    Offer(Offer),
    /// Pre-select a provider pin on the map view.
    MapFocus { provider_id: String },
    Cart(BookingDraft),
    Payment(PaymentRequest),
    Order(Order),
    Booking(Booking),
    Therapist(Therapist),
    Beautician(Beautician),
    Assignment(Assignment),
    Chat(ChatPeer),
    VendorSignup(VendorSignupDraft),
}

impl ScreenContext {
    /// Short tag for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ScreenContext::Salon(_) => "salon",
            ScreenContext::Category(_) => "category",
            ScreenContext::Offer(_) => "offer",
            ScreenContext::MapFocus { .. } => "mapFocus",
            ScreenContext::Cart(_) => "cart",
            ScreenContext::Payment(_) => "payment",
            ScreenContext::Order(_) => "order",
            ScreenContext::Booking(_) => "booking",
            ScreenContext::Therapist(_) => "therapist",
            ScreenContext::Beautician(_) => "beautician",
            ScreenContext::Assignment(_) => "assignment",
            ScreenContext::Chat(_) => "chat",
            ScreenContext::VendorSignup(_) => "vendorSignup",
        }
    }

    pub fn as_salon(&self) -> Option<&Salon> {
        match self {
            ScreenContext::Salon(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            ScreenContext::Category(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_offer(&self) -> Option<&Offer> {
        match self {
            ScreenContext::Offer(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_map_focus(&self) -> Option<&str> {
        match self {
            ScreenContext::MapFocus { provider_id } => Some(provider_id),
            _ => None,
        }
    }

    pub fn as_cart(&self) -> Option<&BookingDraft> {
        match self {
            ScreenContext::Cart(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_payment(&self) -> Option<&PaymentRequest> {
        match self {
            ScreenContext::Payment(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_order(&self) -> Option<&Order> {
        match self {
            ScreenContext::Order(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_booking(&self) -> Option<&Booking> {
        match self {
            ScreenContext::Booking(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_therapist(&self) -> Option<&Therapist> {
        match self {
            ScreenContext::Therapist(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_beautician(&self) -> Option<&Beautician> {
        match self {
            ScreenContext::Beautician(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_assignment(&self) -> Option<&Assignment> {
        match self {
            ScreenContext::Assignment(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_chat(&self) -> Option<&ChatPeer> {
        match self {
            ScreenContext::Chat(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_vendor_signup(&self) -> Option<&VendorSignupDraft> {
        match self {
            ScreenContext::VendorSignup(d) => Some(d),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sevana_core::domain::AssignmentStatus;

    #[test]
    fn test_accessor_matches_variant_only() {
        let ctx = ScreenContext::Assignment(Assignment {
            id: "as1".to_string(),
            booking_id: "b1".to_string(),
            staff_id: "t1".to_string(),
            customer_name: "Asha".to_string(),
            address: "12 Lake Rd".to_string(),
            status: AssignmentStatus::Assigned,
        });

        assert!(ctx.as_assignment().is_some());
        assert!(ctx.as_salon().is_none());
        assert!(ctx.as_booking().is_none());
        assert_eq!(ctx.kind(), "assignment");
    }
}
