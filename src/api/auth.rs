use serde::Deserialize;

use super::Api;
use crate::errors::ApiError;
use crate::models::{AuthSession, LoginForm, RegisterForm, User};
use crate::names;

/// Login and register replies nest the account under `data.member`
/// with a sibling token; older deployments return the pair flat.
#[derive(Deserialize)]
#[serde(untagged)]
enum AuthReply {
    Wrapped { data: MemberToken },
    Flat { user: User, token: String },
}

#[derive(Deserialize)]
struct MemberToken {
    member: User,
    token: String,
}

impl From<AuthReply> for AuthSession {
    fn from(reply: AuthReply) -> Self {
        match reply {
            AuthReply::Wrapped { data } => AuthSession {
                user: data.member,
                token: data.token,
            },
            AuthReply::Flat { user, token } => AuthSession { user, token },
        }
    }
}

impl Api {
    pub async fn login(&self, form: &LoginForm) -> Result<AuthSession, ApiError> {
        let reply: AuthReply = self.post_json(names::LOGIN_PATH, form).await?;
        let session = AuthSession::from(reply);
        tracing::debug!("login reply for {}", session.user.email);
        Ok(session)
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<AuthSession, ApiError> {
        let reply: AuthReply = self.post_json(names::REGISTER_PATH, form).await?;
        let session = AuthSession::from(reply);
        tracing::debug!("register reply for {}", session.user.email);
        Ok(session)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty(names::LOGOUT_PATH).await
    }

    pub async fn profile(&self) -> Result<User, ApiError> {
        self.get_json(names::PROFILE_PATH, &[]).await
    }
}
