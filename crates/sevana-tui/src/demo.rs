//! Sample records the demo shell attaches to payload-bearing navigations
//!
//! Stands in for the listing/search backends that are outside this
//! system's scope; the session machine itself never reads these.

use sevana_core::domain::{
    Assignment, AssignmentStatus, Booking, BookingDraft, CartItem, ChatPeer, Order,
    PaymentRequest, Salon, Therapist,
};

pub fn salon() -> Salon {
    Salon {
        id: "salon_1".to_string(),
        name: "Lotus Day Spa".to_string(),
        address: "12 Lake Rd, Indiranagar".to_string(),
        rating: 4.6,
        distance_km: 1.2,
        is_open: true,
    }
}

pub fn cart() -> BookingDraft {
    BookingDraft {
        salon_id: "salon_1".to_string(),
        items: vec![
            CartItem {
                service_id: "svc_1".to_string(),
                name: "Swedish Massage".to_string(),
                price: 1500,
                duration_min: 60,
            },
            CartItem {
                service_id: "svc_2".to_string(),
                name: "Aromatherapy".to_string(),
                price: 2000,
                duration_min: 90,
            },
        ],
    }
}

pub fn payment_request() -> PaymentRequest {
    PaymentRequest {
        booking_id: "bk_1".to_string(),
        amount: cart().total(),
    }
}

pub fn order() -> Order {
    Order {
        id: "ord_1".to_string(),
        booking_id: "bk_1".to_string(),
        eta_min: 25,
    }
}

pub fn booking() -> Booking {
    Booking {
        id: "bk_1".to_string(),
        salon_name: "Lotus Day Spa".to_string(),
        service: "Swedish Massage".to_string(),
        date: "2025-09-14".to_string(),
        time: "15:00".to_string(),
    }
}

pub fn therapist() -> Therapist {
    Therapist {
        id: "th_1".to_string(),
        vendor_id: "vendor_1".to_string(),
        name: "Priya Sharma".to_string(),
        email: "priya.sharma@example.com".to_string(),
        mobile: "9876543211".to_string(),
        specialization: vec![
            "Swedish Massage".to_string(),
            "Deep Tissue".to_string(),
            "Aromatherapy".to_string(),
        ],
        experience_years: 5,
    }
}

pub fn assignment() -> Assignment {
    Assignment {
        id: "as_1".to_string(),
        booking_id: "bk_1".to_string(),
        staff_id: "th_1".to_string(),
        customer_name: "Asha".to_string(),
        address: "44 Rose Ave".to_string(),
        status: AssignmentStatus::InProgress,
    }
}

pub fn chat_peer() -> ChatPeer {
    ChatPeer {
        id: "th_1".to_string(),
        name: "Priya Sharma".to_string(),
        is_online: true,
        specialties: vec!["Massage Therapy".to_string()],
    }
}
