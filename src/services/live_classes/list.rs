use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::{ACTIVE_LIST_CACHE_KEY, LiveClassService};
use crate::cache::CacheResult;
use crate::config::AppConfig;
use crate::models::live_classes::entities::LiveClass;
use crate::models::live_classes::requests::LiveClassListQuery;
use crate::models::live_classes::responses::{
    ActiveLiveClassListResponse, LiveClassListResponse, LiveClassResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::time::now_sao_paulo;

/// Anexa o status calculado no momento da leitura
///
/// Linhas com data/horário ilegíveis são puladas com aviso no log em vez
/// de derrubar a listagem inteira.
fn with_status(classes: Vec<LiveClass>) -> Vec<LiveClassResponse> {
    let now = now_sao_paulo();
    classes
        .into_iter()
        .filter_map(|class| match class.status_at(now) {
            Ok(status) => Some(LiveClassResponse { class, status }),
            Err(e) => {
                warn!("Aula {} com horário ilegível: {}", class.id, e);
                None
            }
        })
        .collect()
}

/// Listagem administrativa de aulas
/// GET /live-classes
pub async fn list_live_classes(
    service: &LiveClassService,
    request: &HttpRequest,
    query: LiveClassListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_live_classes_with_pagination(query).await {
        Ok((classes, pagination)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            LiveClassListResponse {
                items: with_status(classes),
                pagination,
            },
            "Consulta realizada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Listagem de aulas falhou: {e}"),
            )),
        ),
    }
}

/// Listagem do aluno: aulas ativas dentro da janela de exibição
///
/// A aula segue listada até `end + grace` (rotulada `encerrada` dentro da
/// janela) para permitir a saída tardia; depois disso sai da listagem.
/// Leitura quente, servida de cache com TTL curto.
/// GET /live-classes/active
pub async fn list_active_live_classes(
    service: &LiveClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let cache = service.get_cache(request);
    let config = AppConfig::get();

    let classes: Vec<LiveClass> = match cache.get_json(ACTIVE_LIST_CACHE_KEY).await {
        CacheResult::Found(classes) => classes,
        CacheResult::NotFound | CacheResult::ExistsButNoValue => {
            let storage = service.get_storage(request);
            match storage.list_active_live_classes().await {
                Ok(classes) => {
                    cache
                        .insert_json(
                            ACTIVE_LIST_CACHE_KEY.to_string(),
                            &classes,
                            config.live_classes.active_list_ttl,
                        )
                        .await;
                    classes
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Listagem de aulas ativas falhou: {e}"),
                        ),
                    ));
                }
            }
        }
    };

    let now = now_sao_paulo();
    let grace = config.live_classes.grace_minutes;

    let items = classes
        .into_iter()
        .filter_map(|class| {
            // Elegibilidade de exibição e rótulo de status são regras
            // separadas: aqui primeiro corta, depois rotula
            match class.display_eligible_at(now, grace) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    warn!("Aula {} com horário ilegível: {}", class.id, e);
                    return None;
                }
            }
            match class.status_at(now) {
                Ok(status) => Some(LiveClassResponse { class, status }),
                Err(_) => None,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ActiveLiveClassListResponse { items },
        "Consulta realizada",
    )))
}

/// Detalhe de aula com status calculado
/// GET /live-classes/{id}
pub async fn get_live_class(
    service: &LiveClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_live_class_by_id(class_id).await {
        Ok(Some(class)) => match class.status_at(now_sao_paulo()) {
            Ok(status) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                LiveClassResponse { class, status },
                "Consulta realizada",
            ))),
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Horário da aula ilegível: {e}"),
                )),
            ),
        },
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LiveClassNotFound,
            "Aula não encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Consulta de aula falhou: {e}"),
            )),
        ),
    }
}
