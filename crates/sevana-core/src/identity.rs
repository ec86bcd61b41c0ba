//! Identity types: roles, the merge-accumulated user profile, credentials

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Authenticated role. Determines which portal sub-tree is reachable
/// after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Employee,
    Vendor,
    VendorApplicant,
    Admin,
    AccountsDepartment,
    MarketingDepartment,
    FinanceDepartment,
    LegalDepartment,
    CustomerCare,
    StaffDepartment,
    VendorList,
    CustomerData,
    FoDepartment,
    ItDepartment,
    SuperAdmin,
    HoDetails,
    CorporateOffice,
    Advocate,
    CaCs,
    Directors,
    HrDepartment,
}

impl Role {
    /// Back-office department roles all share the department dashboard.
    pub fn is_department(&self) -> bool {
        !matches!(
            self,
            Role::Customer
                | Role::Employee
                | Role::Vendor
                | Role::VendorApplicant
                | Role::Admin
                | Role::SuperAdmin
        )
    }

    /// The legacy string tag for this role (the serde representation).
    pub fn tag(&self) -> String {
        serde_json::to_value(self)
            .map(|v| v.as_str().unwrap_or_default().to_string())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Partially-built user identity, accumulated over the identity workflow.
///
/// Fields arrive piecemeal: the mobile number after OTP dispatch, the
/// verification flag after OTP entry, name/email/etc. after profile
/// completion, everything at once after a credential login. New fields
/// overlay old ones; the whole record is only replaced on logout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub is_verified: bool,
    pub role: Option<Role>,
}

impl UserProfile {
    /// Overlay the fields of `update` onto this profile. `None` fields in
    /// the update leave the existing value untouched.
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = Some(name);
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(gender) = update.gender {
            self.gender = Some(gender);
        }
        if let Some(dob) = update.date_of_birth {
            self.date_of_birth = Some(dob);
        }
    }

    /// Absorb a full identity returned by a successful login.
    pub fn absorb_identity(&mut self, identity: &Identity) {
        self.id = Some(identity.id.clone());
        self.name = Some(identity.name.clone());
        self.email = Some(identity.email.clone());
        self.mobile = Some(identity.mobile.clone());
        self.role = Some(identity.role);
        self.is_verified = true;
    }
}

/// Profile fields collected by the profile-setup step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
}

/// Full identity as returned by the auth service on successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub role: Role,
}

/// Credential-login request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tags_match_legacy_identifiers() {
        assert_eq!(Role::VendorApplicant.tag(), "vendor_applicant");
        assert_eq!(Role::SuperAdmin.tag(), "super_admin");
        assert_eq!(Role::CaCs.tag(), "ca_cs");
        assert_eq!(Role::HrDepartment.tag(), "hr_department");
    }

    #[test]
    fn test_department_classification() {
        assert!(Role::FinanceDepartment.is_department());
        assert!(Role::Advocate.is_department());
        assert!(Role::Directors.is_department());
        assert!(!Role::Vendor.is_department());
        assert!(!Role::SuperAdmin.is_department());
        assert!(!Role::Customer.is_department());
    }

    #[test]
    fn test_profile_merge_overlays_only_present_fields() {
        let mut profile = UserProfile {
            mobile: Some("9876543210".to_string()),
            ..Default::default()
        };
        profile.merge(ProfileUpdate {
            name: Some("Asha".to_string()),
            email: Some("a@x.com".to_string()),
            ..Default::default()
        });

        assert_eq!(profile.name.as_deref(), Some("Asha"));
        assert_eq!(profile.email.as_deref(), Some("a@x.com"));
        // Untouched by the merge
        assert_eq!(profile.mobile.as_deref(), Some("9876543210"));

        // A second merge with None fields leaves earlier values alone
        profile.merge(ProfileUpdate {
            gender: Some(Gender::Female),
            ..Default::default()
        });
        assert_eq!(profile.name.as_deref(), Some("Asha"));
        assert_eq!(profile.gender, Some(Gender::Female));
    }

    #[test]
    fn test_absorb_identity_marks_verified() {
        let mut profile = UserProfile::default();
        profile.absorb_identity(&Identity {
            id: "u1".to_string(),
            name: "Ravi".to_string(),
            email: "r@x.com".to_string(),
            mobile: "9876543210".to_string(),
            role: Role::Vendor,
        });

        assert!(profile.is_verified);
        assert_eq!(profile.role, Some(Role::Vendor));
        assert_eq!(profile.name.as_deref(), Some("Ravi"));
    }
}
