use axum::{
    http::{
        header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE},
        request::Parts,
        HeaderName, HeaderValue, Method,
    },
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth, branch, category, feedback, health, ingredient, menu, nutrition, order, role,
        staff, support, table, table_group, user, ws,
    },
    error::AppError,
    middleware::tenant::{BRANCH_ID_HEADER, COMPANY_SLUG_HEADER},
    state::AppState,
    util::origin::is_allowed_origin,
};

/// Requests per second replenished for each client IP on the auth routes.
const AUTH_RATE_PER_SECOND: u64 = 2;
const AUTH_RATE_BURST: u32 = 10;

#[derive(OpenApi)]
#[openapi(
    info(title = "DineFlow API", description = "Multi-tenant restaurant ordering backend"),
    paths(
        health::health,
        auth::register,
        auth::login,
        auth::forgot_password,
        auth::reset_password,
        auth::me,
        menu::get_menu,
        menu::get_menu_item,
        menu::create_menu_item,
        menu::update_menu_item,
        menu::delete_menu_item,
        menu::get_recipe,
        menu::replace_recipe,
        category::get_categories,
        category::create_category,
        category::delete_category,
        table::get_tables,
        table::create_table,
        table::update_table,
        table::delete_table,
        table_group::get_table_groups,
        table_group::create_table_group,
        table_group::update_table_group,
        table_group::delete_table_group,
        order::get_orders,
        order::create_order,
        order::update_order_status,
        order::cancel_order,
        order::cancel_order_item,
        feedback::create_feedback,
        ingredient::get_ingredients,
        ingredient::get_low_stock,
        ingredient::create_ingredient,
        ingredient::update_ingredient,
        ingredient::delete_ingredient,
        ingredient::record_waste,
        staff::get_staff,
        staff::create_staff,
        staff::update_staff,
        staff::delete_staff,
        user::get_users,
        user::create_user,
        user::update_user,
        user::delete_user,
        role::get_roles,
        role::create_role,
        role::update_role,
        role::delete_role,
        branch::get_branches,
        branch::get_branch,
        branch::create_branch,
        branch::update_branch,
        branch::delete_branch,
        support::get_tickets,
        support::get_ticket,
        support::create_ticket,
        support::update_ticket,
        support::delete_ticket,
        nutrition::generate_nutrition,
        ws::connect,
    ),
    tags(
        (name = "health", description = "Liveness and database status"),
        (name = "auth", description = "Registration, login and password reset"),
        (name = "menu", description = "Menu items and recipes"),
        (name = "category", description = "Menu categories"),
        (name = "table", description = "Restaurant tables"),
        (name = "table_group", description = "Table groups"),
        (name = "order", description = "Orders and cancellations"),
        (name = "feedback", description = "Customer ratings"),
        (name = "ingredient", description = "Inventory and waste"),
        (name = "staff", description = "Staff members"),
        (name = "user", description = "Company users"),
        (name = "role", description = "Roles and permissions"),
        (name = "branch", description = "Company branches"),
        (name = "support", description = "Support tickets"),
        (name = "nutrition", description = "AI nutrition estimates"),
        (name = "realtime", description = "WebSocket order events"),
    ),
    modifiers(&BearerAuth),
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Builds every API route with its layers.
///
/// Auth routes are rate limited per client IP, taken from `X-Forwarded-For`,
/// `X-Real-IP` or `Forwarded` when a proxy sets them and from the peer address
/// otherwise. The router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let governor = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(AUTH_RATE_PER_SECOND)
        .burst_size(AUTH_RATE_BURST)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid auth rate limit".to_string()))?;

    let auth_routes = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .layer(GovernorLayer::new(governor));

    let api_routes = Router::new()
        .route("/api/health", get(health::health))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/menu",
            get(menu::get_menu).post(menu::create_menu_item),
        )
        .route(
            "/api/menu/{id}",
            get(menu::get_menu_item)
                .put(menu::update_menu_item)
                .delete(menu::delete_menu_item),
        )
        .route(
            "/api/menu/{id}/recipe",
            get(menu::get_recipe).put(menu::replace_recipe),
        )
        .route(
            "/api/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/api/categories/{name}",
            delete(category::delete_category),
        )
        .route(
            "/api/tables",
            get(table::get_tables).post(table::create_table),
        )
        .route(
            "/api/tables/{id}",
            put(table::update_table).delete(table::delete_table),
        )
        .route(
            "/api/table-groups",
            get(table_group::get_table_groups).post(table_group::create_table_group),
        )
        .route(
            "/api/table-groups/{id}",
            put(table_group::update_table_group).delete(table_group::delete_table_group),
        )
        .route(
            "/api/orders",
            get(order::get_orders).post(order::create_order),
        )
        .route("/api/orders/{id}/status", put(order::update_order_status))
        .route("/api/orders/{id}/cancel", post(order::cancel_order))
        .route(
            "/api/orders/{id}/items/{item_id}/cancel",
            post(order::cancel_order_item),
        )
        .route("/api/feedback", post(feedback::create_feedback))
        .route(
            "/api/ingredients",
            get(ingredient::get_ingredients).post(ingredient::create_ingredient),
        )
        .route("/api/ingredients/low-stock", get(ingredient::get_low_stock))
        .route(
            "/api/ingredients/{id}",
            put(ingredient::update_ingredient).delete(ingredient::delete_ingredient),
        )
        .route("/api/ingredients/{id}/waste", post(ingredient::record_waste))
        .route("/api/staff", get(staff::get_staff).post(staff::create_staff))
        .route(
            "/api/staff/{id}",
            put(staff::update_staff).delete(staff::delete_staff),
        )
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/users/{id}",
            put(user::update_user).delete(user::delete_user),
        )
        .route("/api/roles", get(role::get_roles).post(role::create_role))
        .route(
            "/api/roles/{id}",
            put(role::update_role).delete(role::delete_role),
        )
        .route(
            "/api/branches",
            get(branch::get_branches).post(branch::create_branch),
        )
        .route(
            "/api/branches/{id}",
            get(branch::get_branch)
                .put(branch::update_branch)
                .delete(branch::delete_branch),
        )
        .route(
            "/api/support-tickets",
            get(support::get_tickets).post(support::create_ticket),
        )
        .route(
            "/api/support-tickets/{id}",
            get(support::get_ticket)
                .put(support::update_ticket)
                .delete(support::delete_ticket),
        )
        .route("/api/ai/nutrition", post(nutrition::generate_nutrition))
        .route("/api/ws", get(ws::connect));

    Ok(Router::new()
        .merge(auth_routes)
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(cors_layer(config.allowed_origins.clone()))
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _: &Parts| {
                origin
                    .to_str()
                    .map(|o| is_allowed_origin(o, &allowed_origins))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static(COMPANY_SLUG_HEADER),
            HeaderName::from_static(BRANCH_ID_HEADER),
        ])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected: clients behind a proxy are told apart by their forwarded address
    #[test]
    fn auth_rate_limit_keys_on_forwarded_client() {
        use tower_governor::key_extractor::KeyExtractor;

        let request = axum::http::Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(())
            .unwrap();

        let key = SmartIpKeyExtractor.extract(&request).unwrap();

        assert_eq!(key.to_string(), "203.0.113.7");
    }

    /// Expected: every documented handler shows up in the generated document
    #[test]
    fn openapi_lists_routes_and_bearer_scheme() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/orders"));
        assert!(doc.paths.paths.contains_key("/api/orders/{id}/items/{item_id}/cancel"));
        assert!(doc.paths.paths.contains_key("/api/ai/nutrition"));
        assert!(doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("bearer")));
    }
}
