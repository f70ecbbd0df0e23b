/*!
 * Middleware de limite de requisições
 *
 * Limita a frequência de chamadas por IP de origem, protegendo os
 * endpoints públicos (envio de redação, registro de presença) contra
 * scripts e cliques repetidos.
 *
 * ## Uso
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::rate_limit::RateLimit;
 *
 * App::new()
 *     .service(
 *         web::scope("/api/v1/live-classes/{id}/attendance")
 *             .wrap(RateLimit::attendance())
 *             .route("/entry", web::post().to(entry_handler))
 *     )
 * ```
 *
 * ## Regras
 *
 * - A chave é o IP do cliente mais o prefixo da rota
 * - Estourou o limite: 429 Too Many Requests com Retry-After
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

/// Contadores por IP:prefixo, expirando com a janela
static RATE_LIMIT_CACHE: Lazy<Cache<String, u32>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(60))
        .max_capacity(100_000)
        .build()
});

/// Configuração do limite
#[derive(Clone)]
pub struct RateLimit {
    /// Máximo de requisições na janela
    max_requests: u32,
    /// Janela (segundos)
    window_secs: u64,
    /// Prefixo da chave (separa endpoints)
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// Envio de redação: 5/minuto/IP
    pub fn submission() -> Self {
        Self::new(5, 60).with_prefix("submission")
    }

    /// Registro de presença: 20/minuto/IP
    pub fn attendance() -> Self {
        Self::new(20, 60).with_prefix("attendance")
    }

    /// Limite genérico de API: 100/minuto/IP
    pub fn api() -> Self {
        Self::new(100, 60).with_prefix("api")
    }
}

/// Extrai o IP do cliente
///
/// Atrás de proxy reverso, os cabeçalhos X-Forwarded-For / X-Real-IP
/// precisam estar configurados corretamente; valores ilegíveis são
/// descartados para que um cabeçalho forjado não quebre a chave.
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

/// Resposta 429
fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Muitas requisições, tente novamente em instantes",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            max_requests: self.max_requests,
            window_secs: self.window_secs,
            key_prefix: self.key_prefix.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let max_requests = self.max_requests;
        let window_secs = self.window_secs;
        let key = format!("{}:{}", self.key_prefix, extract_client_ip(&req));

        Box::pin(async move {
            let count = RATE_LIMIT_CACHE.get(&key).await.unwrap_or(0);

            if count >= max_requests {
                warn!("Limite de requisições excedido para {}", key);
                let response = create_rate_limit_response(window_secs);
                return Ok(req.into_response(response).map_into_right_body());
            }

            RATE_LIMIT_CACHE.insert(key, count + 1).await;

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
