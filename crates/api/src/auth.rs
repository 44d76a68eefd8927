//! Authenticate/authorize handshake

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{Credentials, SuiteConfig};
use crate::endpoints::{BrandSubdomain, Operation};
use crate::error::{Error, Result};
use crate::session::{ApiResponse, ApiSession};

#[derive(Debug, Deserialize)]
struct AuthenticateResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct AuthorizeResponse {
    active_brand_subdomain: String,
}

/// A session that completed the handshake.
///
/// Resource checks only accept this type, so they cannot run before login.
#[derive(Debug, Clone)]
pub struct AuthorizedSession {
    session: ApiSession,
    subdomain: BrandSubdomain,
}

impl AuthorizedSession {
    pub fn subdomain(&self) -> &BrandSubdomain {
        &self.subdomain
    }

    pub fn session(&self) -> &ApiSession {
        &self.session
    }

    pub async fn get(&self, operation: Operation, query: &[(&str, &str)]) -> Result<ApiResponse> {
        self.session.get(operation, query).await
    }
}

/// Log in with the credentials configured for `model`.
///
/// The model lookup happens before any request is sent.
pub async fn login(session: ApiSession, config: &SuiteConfig, model: &str) -> Result<AuthorizedSession> {
    let credentials = config.credentials(model)?;
    info!("Logging in as {} (model {})", credentials.username, model);
    authorize(session, credentials).await
}

/// Run the two-step handshake and record the branded subdomain.
pub async fn authorize(mut session: ApiSession, credentials: &Credentials) -> Result<AuthorizedSession> {
    let resp = session
        .post(
            Operation::Authenticate,
            &[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ],
        )
        .await?;
    if !resp.is_success() {
        return Err(Error::Authentication {
            status: resp.status,
        });
    }
    let AuthenticateResponse { token } = resp.json()?;

    let resp = session
        .post(Operation::Authorize, &[("token", token.as_str())])
        .await?;
    if !resp.is_success() {
        return Err(Error::Authorization {
            status: resp.status,
        });
    }
    let AuthorizeResponse {
        active_brand_subdomain,
    } = resp.json()?;

    let subdomain = BrandSubdomain::parse(&active_brand_subdomain)?;
    debug!("Active brand subdomain: {}", subdomain);
    session.endpoints_mut().set_subdomain(subdomain.clone());

    Ok(AuthorizedSession { session, subdomain })
}
