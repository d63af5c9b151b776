// fila-client/tests/api_integration.rs
// Drives the real client against an in-process stand-in for the queue API.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use std::collections::HashMap;

use fila_client::{AdminDashboardQuery, ClientConfig, ClientError, Session};
use shared::client::{LoginRequest, LoginResponse};
use shared::models::{
    AdminDashboard, BarberDashboard, QueueItem, QueueJoin, QueueStatus, QueueStatusUpdate, Role,
    Service, ServiceCreate, ServiceUpdate, User,
};

struct TestApi {
    /// Authorization header seen by the most recent request
    last_auth: Mutex<Option<String>>,
    services: Mutex<Vec<Service>>,
    queue_posts: Mutex<Vec<serde_json::Value>>,
    admin_queries: Mutex<Vec<String>>,
    barber: Mutex<User>,
}

impl TestApi {
    fn new() -> Self {
        Self {
            last_auth: Mutex::new(None),
            services: Mutex::new(vec![Service {
                id: 1,
                name: "Haircut".to_string(),
                price: 40.0,
                avg_duration: 30,
                is_active: true,
            }]),
            queue_posts: Mutex::new(Vec::new()),
            admin_queries: Mutex::new(Vec::new()),
            barber: Mutex::new(barber()),
        }
    }

    fn record_auth(&self, headers: &HeaderMap) {
        *self.last_auth.lock().unwrap() = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
    }
}

fn barber() -> User {
    User {
        id: 2,
        username: "joao".to_string(),
        name: "João".to_string(),
        role: Role::Barber,
        is_online: false,
    }
}

async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    if request.password != "secret" {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(LoginResponse {
        access_token: "tok-123".to_string(),
        user: barber(),
    }))
}

async fn list_services(State(api): State<Arc<TestApi>>, headers: HeaderMap) -> Json<Vec<Service>> {
    api.record_auth(&headers);
    Json(api.services.lock().unwrap().clone())
}

async fn create_service(
    State(api): State<Arc<TestApi>>,
    Json(payload): Json<ServiceCreate>,
) -> Json<Service> {
    let mut services = api.services.lock().unwrap();
    let service = Service {
        id: services.iter().map(|s| s.id).max().unwrap_or(0) + 1,
        name: payload.name,
        price: payload.price,
        avg_duration: payload.avg_duration,
        is_active: true,
    };
    services.push(service.clone());
    Json(service)
}

async fn update_service(
    State(api): State<Arc<TestApi>>,
    Path(id): Path<i64>,
    Json(payload): Json<ServiceUpdate>,
) -> Result<Json<Service>, StatusCode> {
    let mut services = api.services.lock().unwrap();
    let service = services
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = payload.name {
        service.name = name;
    }
    if let Some(price) = payload.price {
        service.price = price;
    }
    if let Some(avg_duration) = payload.avg_duration {
        service.avg_duration = avg_duration;
    }
    Ok(Json(service.clone()))
}

async fn delete_service(
    State(api): State<Arc<TestApi>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    // Service 1 has queue history behind it
    if id == 1 {
        return Err((
            StatusCode::CONFLICT,
            "Service is referenced by queue history".to_string(),
        ));
    }
    let mut services = api.services.lock().unwrap();
    let before = services.len();
    services.retain(|s| s.id != id);
    if services.len() == before {
        return Err((StatusCode::NOT_FOUND, "Service not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn get_user(
    State(api): State<Arc<TestApi>>,
    Path(id): Path<i64>,
) -> Result<Json<User>, StatusCode> {
    let user = api.barber.lock().unwrap().clone();
    if id != user.id {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(user))
}

async fn toggle_online(
    State(api): State<Arc<TestApi>>,
    headers: HeaderMap,
) -> Result<Json<User>, StatusCode> {
    if !headers.contains_key("authorization") {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut user = api.barber.lock().unwrap();
    user.is_online = !user.is_online;
    Ok(Json(user.clone()))
}

async fn join_queue(
    State(api): State<Arc<TestApi>>,
    Json(payload): Json<serde_json::Value>,
) -> Json<QueueItem> {
    api.queue_posts.lock().unwrap().push(payload.clone());
    let join: QueueJoin = serde_json::from_value(payload).unwrap();
    Json(QueueItem {
        id: 42,
        client_name: join.client_name,
        client_phone: join.client_phone,
        status: QueueStatus::Waiting,
        barber_id: join.barber_id,
        service_id: join.service_id,
        people_ahead: None,
        service: None,
        barber: None,
    })
}

async fn queue_status(Path(id): Path<i64>) -> Result<Json<QueueItem>, StatusCode> {
    if id != 42 {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(QueueItem {
        id: 42,
        client_name: "Ana".to_string(),
        client_phone: "11999990000".to_string(),
        status: QueueStatus::Waiting,
        barber_id: 2,
        service_id: 3,
        people_ahead: Some(2),
        service: None,
        barber: None,
    }))
}

async fn patch_queue(
    Path(id): Path<i64>,
    Json(update): Json<QueueStatusUpdate>,
) -> Result<Json<QueueItem>, StatusCode> {
    if id != 42 {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(QueueItem {
        id: 42,
        client_name: "Ana".to_string(),
        client_phone: "11999990000".to_string(),
        status: update.status,
        barber_id: 2,
        service_id: 3,
        people_ahead: None,
        service: None,
        barber: None,
    }))
}

async fn admin_dashboard(
    State(api): State<Arc<TestApi>>,
    RawQuery(query): RawQuery,
) -> Json<AdminDashboard> {
    api.admin_queries
        .lock()
        .unwrap()
        .push(query.unwrap_or_default());
    Json(AdminDashboard::default())
}

async fn barber_dashboard(Query(params): Query<HashMap<String, String>>) -> Json<BarberDashboard> {
    let mut dashboard = BarberDashboard::default();
    // Echo the requested period back through totalServices for assertions
    dashboard.summary.total_services = params
        .get("days")
        .and_then(|d| d.parse().ok())
        .unwrap_or(0);
    Json(dashboard)
}

async fn spawn_api() -> (String, Arc<TestApi>) {
    let api = Arc::new(TestApi::new());

    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/services", get(list_services).post(create_service))
        .route(
            "/services/{id}",
            patch(update_service).delete(delete_service),
        )
        .route("/users/{id}", get(get_user))
        .route("/users/profile/toggle-online", patch(toggle_online))
        .route("/queue", post(join_queue))
        .route("/queue/status/{id}", get(queue_status))
        .route("/queue/{id}", patch(patch_queue))
        .route("/dashboard/admin", get(admin_dashboard))
        .route("/dashboard/barber", get(barber_dashboard))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    (format!("http://{addr}"), api)
}

#[tokio::test]
async fn login_builds_a_session_and_attaches_the_bearer_token() {
    let (base_url, api) = spawn_api().await;
    let client = ClientConfig::new(&base_url).build();

    let response = client.login("joao", "secret").await.unwrap();
    assert_eq!(response.access_token, "tok-123");

    let session = Session::from_login(response);
    assert_eq!(session.user_id(), 2);
    assert!(!session.is_admin());

    let authed = client.clone().with_token(session.token());
    authed.list_services().await.unwrap();
    assert_eq!(
        api.last_auth.lock().unwrap().as_deref(),
        Some("Bearer tok-123")
    );
}

#[tokio::test]
async fn unauthenticated_requests_carry_no_authorization_header() {
    let (base_url, api) = spawn_api().await;
    let client = ClientConfig::new(&base_url).build();

    client.list_services().await.unwrap();
    assert!(api.last_auth.lock().unwrap().is_none());
}

#[tokio::test]
async fn bad_credentials_map_to_unauthorized() {
    let (base_url, _api) = spawn_api().await;
    let client = ClientConfig::new(&base_url).build();

    let err = client.login("joao", "wrong").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn service_create_update_delete_round_trip() {
    let (base_url, _api) = spawn_api().await;
    let client = ClientConfig::new(&base_url).build();

    let created = client
        .create_service(&ServiceCreate {
            name: "Beard trim".to_string(),
            price: 25.0,
            avg_duration: 15,
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Beard trim");

    let services = client.list_services().await.unwrap();
    assert!(services.iter().any(|s| s.id == created.id));

    let updated = client
        .update_service(
            created.id,
            &ServiceUpdate {
                price: Some(30.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 30.0);
    assert_eq!(updated.name, "Beard trim");

    client.delete_service(created.id).await.unwrap();
    let services = client.list_services().await.unwrap();
    assert!(!services.iter().any(|s| s.id == created.id));
}

#[tokio::test]
async fn delete_with_queue_history_is_a_conflict() {
    let (base_url, _api) = spawn_api().await;
    let client = ClientConfig::new(&base_url).build();

    let err = client.delete_service(1).await.unwrap_err();
    assert!(err.is_conflict());
    match err {
        ClientError::Conflict(message) => assert!(message.contains("queue history")),
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn booking_join_sends_the_exact_contract_body() {
    let (base_url, api) = spawn_api().await;
    let client = ClientConfig::new(&base_url).build();

    let item = client
        .join_queue(&QueueJoin {
            client_name: "Ana".to_string(),
            client_phone: "11999990000".to_string(),
            barber_id: 2,
            service_id: 3,
        })
        .await
        .unwrap();

    assert_eq!(item.id, 42);
    assert_eq!(item.status, QueueStatus::Waiting);

    let posts = api.queue_posts.lock().unwrap();
    assert_eq!(
        posts[0],
        serde_json::json!({
            "clientName": "Ana",
            "clientPhone": "11999990000",
            "barberId": 2,
            "serviceId": 3,
        })
    );
}

#[tokio::test]
async fn queue_status_polls_and_transitions() {
    let (base_url, _api) = spawn_api().await;
    let client = ClientConfig::new(&base_url).build();

    let item = client.queue_status(42).await.unwrap();
    assert_eq!(item.status, QueueStatus::Waiting);
    assert_eq!(item.people_ahead, Some(2));

    let item = client
        .update_queue_status(42, QueueStatus::InProgress)
        .await
        .unwrap();
    assert_eq!(item.status, QueueStatus::InProgress);

    let err = client.queue_status(999).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn online_toggle_round_trips_through_the_profile() {
    let (base_url, _api) = spawn_api().await;
    let client = ClientConfig::new(&base_url)
        .with_token("tok-123")
        .build();

    assert!(!client.get_user(2).await.unwrap().is_online);

    let toggled = client.toggle_online().await.unwrap();
    assert!(toggled.is_online);

    // The confirming re-fetch sees the server's new authoritative value
    assert!(client.get_user(2).await.unwrap().is_online);
}

#[tokio::test]
async fn toggle_without_a_session_is_rejected() {
    let (base_url, _api) = spawn_api().await;
    let client = ClientConfig::new(&base_url).build();

    let err = client.toggle_online().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn admin_dashboard_omits_empty_filters_from_the_query_string() {
    let (base_url, api) = spawn_api().await;
    let client = ClientConfig::new(&base_url).build();

    client
        .admin_dashboard(&AdminDashboardQuery {
            start_date: Some("2024-05-01".to_string()),
            end_date: Some("2024-05-31".to_string()),
            service_id: Some(3),
        })
        .await
        .unwrap();

    client
        .admin_dashboard(&AdminDashboardQuery {
            start_date: Some(String::new()),
            end_date: None,
            service_id: None,
        })
        .await
        .unwrap();

    let queries = api.admin_queries.lock().unwrap();
    assert_eq!(
        queries[0],
        "startDate=2024-05-01&endDate=2024-05-31&serviceId=3"
    );
    assert_eq!(queries[1], "");
}

#[tokio::test]
async fn barber_dashboard_sends_days_only_when_set() {
    let (base_url, _api) = spawn_api().await;
    let client = ClientConfig::new(&base_url).build();

    let dashboard = client.barber_dashboard(Some(7)).await.unwrap();
    assert_eq!(dashboard.summary.total_services, 7);

    let dashboard = client.barber_dashboard(None).await.unwrap();
    assert_eq!(dashboard.summary.total_services, 0);
}
