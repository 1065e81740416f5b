use serde::{Deserialize, Serialize};

/// Body of a successful `accessToken` call, for either grant type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_in: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl AccessToken {
    /// Absolute expiry of the access token given when it was issued.
    /// `None` when the advertised lifetime does not fit a timestamp.
    pub fn expires_at(
        &self,
        issued_at: chrono::DateTime<chrono::Utc>,
    ) -> Option<chrono::DateTime<chrono::Utc>> {
        offset_by(issued_at, self.expires_in)
    }

    pub fn refresh_expires_at(
        &self,
        issued_at: chrono::DateTime<chrono::Utc>,
    ) -> Option<chrono::DateTime<chrono::Utc>> {
        self.refresh_token_expires_in
            .and_then(|secs| offset_by(issued_at, secs))
    }

    /// Granted scopes; LinkedIn separates them with commas.
    pub fn scopes(&self) -> Vec<&str> {
        self.scope
            .as_deref()
            .map(|s| {
                s.split([',', ' '])
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn offset_by(
    issued_at: chrono::DateTime<chrono::Utc>,
    secs: i64,
) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::TimeDelta::try_seconds(secs).and_then(|delta| issued_at.checked_add_signed(delta))
}

/// Body of an `introspectToken` call. Timestamps are epoch seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenIntrospection {
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
}

impl TokenIntrospection {
    pub fn expires_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.expires_at
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
    }
}

/// Subset of the `/v2/me` lite profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vanity_name: Option<String>,
}

impl Profile {
    pub fn display_name(&self) -> Option<String> {
        match (&self.localized_first_name, &self.localized_last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.clone()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;

    #[test]
    fn access_token_from_linkedin_body() {
        let resp = HttpResponse::new(
            200,
            r#"{
                "access_token": "AQX",
                "expires_in": 5184000,
                "refresh_token": "AQW",
                "refresh_token_expires_in": 31536000,
                "scope": "r_liteprofile,w_member_social"
            }"#,
        );
        let token: AccessToken = resp.json().unwrap();
        assert_eq!(token.access_token, "AQX");
        assert_eq!(token.refresh_token.as_deref(), Some("AQW"));
        assert_eq!(token.scopes(), vec!["r_liteprofile", "w_member_social"]);
    }

    #[test]
    fn access_token_minimal_body() {
        let token: AccessToken =
            serde_json::from_str(r#"{"access_token":"A","expires_in":60}"#).unwrap();
        assert!(token.refresh_token.is_none());
        assert!(token.scopes().is_empty());
        assert!(token.refresh_expires_at(chrono::Utc::now()).is_none());
    }

    #[test]
    fn access_token_expiry_is_relative_to_issue_time() {
        let token: AccessToken =
            serde_json::from_str(r#"{"access_token":"A","expires_in":3600}"#).unwrap();
        let issued = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(token.expires_at(issued).unwrap().timestamp(), 1_700_003_600);
    }

    #[test]
    fn out_of_range_lifetimes_have_no_expiry() {
        let token: AccessToken = serde_json::from_str(
            r#"{
                "access_token": "A",
                "expires_in": 9223372036854775807,
                "refresh_token_expires_in": -9223372036854775807
            }"#,
        )
        .unwrap();
        let now = chrono::Utc::now();
        assert!(token.expires_at(now).is_none());
        assert!(token.refresh_expires_at(now).is_none());

        // Fits a TimeDelta but not a DateTime.
        let token: AccessToken = serde_json::from_str(
            r#"{"access_token":"A","expires_in":9000000000000000}"#,
        )
        .unwrap();
        assert!(token.expires_at(now).is_none());
    }

    #[test]
    fn introspection_inactive_token() {
        let info: TokenIntrospection =
            serde_json::from_str(r#"{"active":false,"status":"revoked"}"#).unwrap();
        assert!(!info.active);
        assert_eq!(info.status.as_deref(), Some("revoked"));
        assert!(info.expires_at_utc().is_none());
    }

    #[test]
    fn introspection_active_token() {
        let info: TokenIntrospection = serde_json::from_str(
            r#"{
                "active": true,
                "client_id": "CID",
                "authorized_at": 1700000000,
                "created_at": 1700000000,
                "status": "active",
                "expires_at": 1705184000,
                "scope": "r_liteprofile",
                "auth_type": "3L"
            }"#,
        )
        .unwrap();
        assert!(info.active);
        assert_eq!(info.expires_at_utc().unwrap().timestamp(), 1_705_184_000);
    }

    #[test]
    fn profile_ignores_unknown_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "id": "yrZCpj2Z12",
                "localizedFirstName": "Bob",
                "localizedLastName": "Smith",
                "profilePicture": {"displayImage": "urn:li:digitalmediaAsset:C4D00AAAAbBCDEFGhiJ"}
            }"#,
        )
        .unwrap();
        assert_eq!(profile.id, "yrZCpj2Z12");
        assert_eq!(profile.display_name().as_deref(), Some("Bob Smith"));
    }

    #[test]
    fn profile_without_names() {
        let profile: Profile = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(profile.display_name().is_none());
    }
}
