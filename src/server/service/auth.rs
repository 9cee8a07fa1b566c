//! Registration, login and password reset.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use url::Url;

use crate::{
    model::auth::{CompanyLinkDto, LoginDto, ResetPasswordDto},
    server::{
        config::Config,
        data::{
            company::CompanyRepository,
            user::{NewUser, UserRepository},
        },
        error::{auth::AuthError, internal::InternalError, AppError},
        model::{
            auth::{Authenticated, RegisterParams, RequestOrigin},
            role::CUSTOMER_ROLE,
        },
        service::{
            email::{EmailDispatcher, EmailMessage},
            token::{TokenService, LOGIN_TOKEN_TTL, REGISTER_TOKEN_TTL},
        },
        util::slug::{company_url, slug_from_email},
    },
};

const BCRYPT_COST: u32 = 10;

/// How long a password reset link stays valid.
const RESET_TOKEN_TTL: Duration = Duration::hours(1);

const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Hashes a password off the async runtime.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(InternalError::from)?;

    Ok(hash)
}

/// Checks a password against a stored hash. A malformed hash never matches.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password check task failed: {}", e)))?;

    Ok(matches.unwrap_or(false))
}

/// 32 random bytes, hex encoded.
fn generate_reset_token() -> String {
    let bytes: [u8; 32] = rand::random();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    mailer: &'a EmailDispatcher,
    config: &'a Config,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        mailer: &'a EmailDispatcher,
        config: &'a Config,
    ) -> Self {
        Self {
            db,
            tokens,
            mailer,
            config,
        }
    }

    fn frontend_url(&self) -> &str {
        self.config
            .frontend_url
            .as_deref()
            .unwrap_or(DEFAULT_FRONTEND_URL)
            .trim_end_matches('/')
    }

    /// Resolves `path` against the frontend URL, with an optional query pair.
    fn frontend_link(&self, path: &str, query: Option<(&str, &str)>) -> Result<Url, AppError> {
        let mut url = Url::parse(&format!("{}/", self.frontend_url()))
            .and_then(|base| base.join(path))
            .map_err(|e| AppError::InternalError(format!("Invalid frontend URL: {}", e)))?;
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }

        Ok(url)
    }

    fn company_link(&self, company: entity::company::Model, origin: &RequestOrigin) -> CompanyLinkDto {
        let url = company_url(
            &company.slug,
            self.config.frontend_url.as_deref(),
            origin.origin.as_deref(),
            origin.host.as_deref(),
        );

        CompanyLinkDto {
            id: company.id,
            name: company.name,
            slug: company.slug,
            url,
        }
    }

    /// Registers a user together with the company named after their email.
    ///
    /// The company slug is the email's local part. An existing company with that slug is
    /// joined as a customer whatever role was asked for; otherwise
    /// `"{full_name}'s Restaurant"` is created and the requested role is kept.
    ///
    /// # Returns
    /// - `Ok(Authenticated)` - New user, a 24h token and the company link
    /// - `Err(AppError::BadRequest)` - Email taken or unusable as a slug
    pub async fn register(
        &self,
        params: RegisterParams,
        origin: &RequestOrigin,
    ) -> Result<Authenticated, AppError> {
        let user_repo = UserRepository::new(self.db);
        let company_repo = CompanyRepository::new(self.db);
        let login_url = self.frontend_link("login", None)?;

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "User with this email already exists".to_string(),
            ));
        }

        let slug = slug_from_email(&params.email).ok_or_else(|| {
            AppError::BadRequest("Email cannot be used to derive a company name".to_string())
        })?;

        let (company, role) = match company_repo.find_by_slug(&slug).await? {
            Some(company) => {
                if params.role != CUSTOMER_ROLE {
                    tracing::warn!(
                        "Registration of {} into existing company {} requested role '{}'; using '{}'",
                        params.email,
                        company.id,
                        params.role,
                        CUSTOMER_ROLE
                    );
                }
                (company, CUSTOMER_ROLE.to_string())
            }
            None => {
                let name = format!("{}'s Restaurant", params.full_name);
                let domain = format!("{}.vercel.app", slug);
                let company = company_repo.create(name, slug, Some(domain)).await?;
                tracing::info!("Created company {} ({})", company.id, company.slug);
                (company, params.role)
            }
        };

        let password_hash = hash_password(params.password).await?;
        let user = user_repo
            .create(NewUser {
                full_name: params.full_name,
                email: params.email,
                password_hash,
                role,
                company_id: Some(company.id),
                branch_id: None,
                role_id: None,
                phone: None,
            })
            .await?;

        let token = self.tokens.issue(&user, REGISTER_TOKEN_TTL)?;

        self.mailer.dispatch(EmailMessage::welcome(
            &user.email,
            &user.full_name,
            login_url.as_str(),
        ));

        Ok(Authenticated {
            user,
            token,
            company: Some(self.company_link(company, origin)),
        })
    }

    /// Checks credentials and issues a 30 day token.
    ///
    /// Unknown emails and wrong passwords fail identically.
    pub async fn login(
        &self,
        dto: LoginDto,
        origin: &RequestOrigin,
    ) -> Result<Authenticated, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&dto.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(dto.password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user, LOGIN_TOKEN_TTL)?;

        let company = match user.company_id {
            Some(company_id) => CompanyRepository::new(self.db)
                .find_by_id(company_id)
                .await?
                .map(|company| self.company_link(company, origin)),
            None => None,
        };

        Ok(Authenticated {
            user,
            token,
            company,
        })
    }

    /// Stores a one-hour reset token and mails the link.
    ///
    /// Succeeds silently for unknown emails so callers cannot discover accounts.
    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = generate_reset_token();
        user_repo
            .set_reset_token(user.id, token.clone(), Utc::now() + RESET_TOKEN_TTL)
            .await?;

        let reset_url = self.frontend_link("reset-password", Some(("token", &token)))?;
        self.mailer
            .send(EmailMessage::password_reset(&user.email, reset_url.as_str()))
            .await?;

        Ok(())
    }

    /// Replaces the password of the user holding an unexpired reset token.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed and token cleared
    /// - `Err(AppError::BadRequest)` - Token unknown or expired
    pub async fn reset_password(&self, dto: ResetPasswordDto) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if dto.new_password.is_empty() {
            return Err(AppError::BadRequest("New password is required".to_string()));
        }

        let Some(user) = user_repo
            .find_by_reset_token(dto.token.trim(), Utc::now())
            .await?
        else {
            return Err(AppError::BadRequest("Invalid or expired token".to_string()));
        };

        let password_hash = hash_password(dto.new_password).await?;
        let user = user_repo.reset_password(user, password_hash).await?;

        let login_url = self.frontend_link("login", None)?;
        self.mailer
            .dispatch(EmailMessage::password_reset_success(&user.email, login_url.as_str()));

        Ok(())
    }

    /// Profile of the authenticated user.
    pub async fn me(&self, user_id: i32) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}

#[cfg(test)]
mod tests {
    use test_utils::builder::TestBuilder;

    use super::*;

    #[test]
    fn reset_token_is_64_hex_chars() {
        let token = generate_reset_token();

        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_reset_token());
    }

    fn config() -> Config {
        Config::from_lookup(|name| match name {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            "JWT_SECRET" => Some("test-secret".to_string()),
            "FRONTEND_URL" => Some("https://app.dineflow.test".to_string()),
            _ => None,
        })
        .unwrap()
    }

    fn register_params(email: &str) -> RegisterParams {
        RegisterParams::from_dto(crate::model::auth::RegisterDto {
            full_name: "Asha Rao".to_string(),
            email: email.to_string(),
            password: "s3cret".to_string(),
            role: None,
        })
        .unwrap()
    }

    /// Expected: link keeps the frontend path and encodes the query value
    #[tokio::test]
    async fn frontend_link_encodes_query() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = config();
        let tokens = TokenService::new(&config.jwt_secret);
        let mailer = EmailDispatcher::default();
        let service = AuthService::new(db, &tokens, &mailer, &config);

        let url = service
            .frontend_link("reset-password", Some(("token", "a b&c")))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://app.dineflow.test/reset-password?token=a+b%26c"
        );
    }

    /// Expected: a company derived from the email and a token scoped to it
    #[tokio::test]
    async fn register_creates_company_and_scoped_token() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let config = config();
        let tokens = TokenService::new(&config.jwt_secret);
        let mailer = EmailDispatcher::default();
        let service = AuthService::new(db, &tokens, &mailer, &config);

        let authenticated = service
            .register(register_params("Asha.Rao@Example.com"), &RequestOrigin::default())
            .await?;

        let company = authenticated.company.unwrap();
        assert_eq!(company.slug, "asharao");
        assert_eq!(company.url, "https://asharao.app.dineflow.test");
        assert_eq!(authenticated.user.email, "asha.rao@example.com");
        assert_eq!(authenticated.user.role, "customer");

        let claims = tokens.verify(&authenticated.token)?;
        assert_eq!(claims.company_id, Some(company.id));

        let duplicate = service
            .register(register_params("asha.rao@example.com"), &RequestOrigin::default())
            .await;
        assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Expected: the joiner lands as a customer with no admin or management access
    #[tokio::test]
    async fn register_into_existing_company_cannot_pick_role() -> Result<(), AppError> {
        use crate::server::{
            middleware::auth::{AuthGuard, Permission},
            model::role::Resource,
        };

        let test = TestBuilder::new()
            .with_tenant_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let config = config();
        let tokens = TokenService::new(&config.jwt_secret);
        let mailer = EmailDispatcher::default();
        let service = AuthService::new(db, &tokens, &mailer, &config);
        let origin = RequestOrigin::default();
        let as_admin = |email: &str| RegisterParams {
            role: "admin".to_string(),
            ..register_params(email)
        };

        let founder = service.register(as_admin("owner@bistro.test"), &origin).await?;
        assert_eq!(founder.user.role, "admin");

        let joiner = service.register(as_admin("owner@cafe.test"), &origin).await?;
        assert_eq!(joiner.user.company_id, founder.user.company_id);
        assert_eq!(joiner.user.role, "customer");

        let claims = tokens.verify(&joiner.token)?;
        let guard = AuthGuard::new(db, &claims);
        let admin = guard.require(&[Permission::Admin]).await;
        let orders = guard.require(&[Permission::Manage(Resource::Orders)]).await;
        assert!(matches!(admin, Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))));
        assert!(matches!(orders, Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))));

        Ok(())
    }

    /// Expected: old password rejected after reset, new one accepted, token single-use
    #[tokio::test]
    async fn reset_flow_replaces_password() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let config = config();
        let tokens = TokenService::new(&config.jwt_secret);
        let mailer = EmailDispatcher::default();
        let service = AuthService::new(db, &tokens, &mailer, &config);
        let origin = RequestOrigin::default();

        service
            .register(register_params("owner@bistro.test"), &origin)
            .await?;
        service.forgot_password("owner@bistro.test").await?;
        service.forgot_password("nobody@bistro.test").await?;

        let token = UserRepository::new(db)
            .find_by_email("owner@bistro.test")
            .await?
            .and_then(|u| u.reset_token)
            .unwrap();
        let reset = || ResetPasswordDto {
            token: token.clone(),
            new_password: "n3w-pass".to_string(),
        };
        service.reset_password(reset()).await?;

        let login = |password: &str| LoginDto {
            email: "owner@bistro.test".to_string(),
            password: password.to_string(),
        };
        let old = service.login(login("s3cret"), &origin).await;
        assert!(matches!(
            old,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
        let fresh = service.login(login("n3w-pass"), &origin).await?;
        assert!(fresh.company.is_some());

        let reused = service.reset_password(reset()).await;
        assert!(matches!(reused, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn verifies_hashed_password() {
        let hash = hash_password("hunter2".to_string()).await.unwrap();

        assert!(verify_password("hunter2".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("wrong".to_string(), hash).await.unwrap());
        assert!(!verify_password("x".to_string(), "not-a-hash".to_string()).await.unwrap());
    }
}
