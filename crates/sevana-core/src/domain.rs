//! Booking-domain records threaded between screens
//!
//! Data only. Pricing, scheduling, and the appointment-status transitions
//! live with external collaborators; these records exist so the session
//! machine can pass a typed payload to the screen that consumes it.

use serde::{Deserialize, Serialize};

/// A salon/spa listing shown on the home and map screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salon {
    pub id: String,
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub distance_km: f64,
    pub is_open: bool,
}

/// A service category tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A promotional offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub description: String,
    pub discount_percent: u8,
    pub valid_until: String,
}

/// One service line in a booking cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub service_id: String,
    pub name: String,
    /// Price in rupees.
    pub price: u32,
    pub duration_min: u16,
}

/// An in-progress booking: the cart a customer carries from salon/map
/// selection into the booking screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub salon_id: String,
    pub items: Vec<CartItem>,
}

impl BookingDraft {
    pub fn total(&self) -> u32 {
        self.items.iter().map(|i| i.price).sum()
    }
}

/// Amount due handed from the booking screen to the payment screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub booking_id: String,
    pub amount: u32,
}

/// A placed order being tracked by the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub booking_id: String,
    pub eta_min: u16,
}

/// A historical or upcoming booking (reschedule/review screens).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub salon_name: String,
    pub service: String,
    pub date: String,
    pub time: String,
}

/// A therapist managed by a vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Therapist {
    pub id: String,
    pub vendor_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub specialization: Vec<String>,
    pub experience_years: u8,
}

/// A beautician managed by a vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beautician {
    pub id: String,
    pub vendor_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub specializations: Vec<String>,
    pub experience_years: u8,
}

/// Status of a field-staff assignment.
///
/// The transitions (`Assigned → InProgress → Completed | Cancelled`) are
/// driven by an external collaborator; the session machine only carries
/// the record into the tracking screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl AssignmentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AssignmentStatus::Completed | AssignmentStatus::Cancelled)
    }
}

/// A field-staff assignment consumed by the customer tracking screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub booking_id: String,
    pub staff_id: String,
    pub customer_name: String,
    pub address: String,
    pub status: AssignmentStatus,
}

/// The person on the other side of the chat screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPeer {
    pub id: String,
    pub name: String,
    pub is_online: bool,
    pub specialties: Vec<String>,
}

/// Accumulated state of the vendor signup funnel, carried between its
/// screens as they hand off to one another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorSignupDraft {
    pub category: Option<String>,
    pub signup_type: Option<String>,
    pub provider: Option<String>,
    pub mobile: Option<String>,
    pub contact_name: Option<String>,
    pub profile_completion: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_draft_total() {
        let draft = BookingDraft {
            salon_id: "s1".to_string(),
            items: vec![
                CartItem {
                    service_id: "svc1".to_string(),
                    name: "Swedish Massage".to_string(),
                    price: 1500,
                    duration_min: 60,
                },
                CartItem {
                    service_id: "svc2".to_string(),
                    name: "Aromatherapy".to_string(),
                    price: 2000,
                    duration_min: 90,
                },
            ],
        };
        assert_eq!(draft.total(), 3500);
    }

    #[test]
    fn test_assignment_status_terminal() {
        assert!(!AssignmentStatus::Assigned.is_terminal());
        assert!(!AssignmentStatus::InProgress.is_terminal());
        assert!(AssignmentStatus::Completed.is_terminal());
        assert!(AssignmentStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_assignment_status_tags() {
        let v = serde_json::to_value(AssignmentStatus::InProgress).unwrap();
        assert_eq!(v, serde_json::json!("in_progress"));
    }
}
