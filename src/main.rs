use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    CatalogRes, CreatePrescriptionReq, CreateRecordRes, DashboardData, EmergencyContact,
    HealthRes, HealthService, ListAppointmentsRes, ListDoctorsRes, ListPatientsRes,
    ListPrescriptionsRes, MedicalHistory, MedicationEntry, MonthlyBucket, RegisterDoctorReq,
    RegisterPatientReq, ScheduleAppointmentReq, SpecialtyCount, Stats, StatusCount,
};
use clinic_core::constants::DEFAULT_CLINIC_DATA_DIR;
use clinic_core::{
    AppointmentService, ClinicError, CoreConfig, DashboardService, DocumentStore, DoctorService,
    PatientService, PrescriptionService, catalog,
};

/// Application state shared across REST API handlers.
///
/// One service per collection plus the dashboard service; all of them are
/// cheap clones over the same document store.
#[derive(Clone)]
struct AppState {
    patients: PatientService,
    doctors: DoctorService,
    appointments: AppointmentService,
    prescriptions: PrescriptionService,
    dashboard: DashboardService,
}

impl AppState {
    fn new(store: DocumentStore) -> Self {
        Self {
            patients: PatientService::new(store.clone()),
            doctors: DoctorService::new(store.clone()),
            appointments: AppointmentService::new(store.clone()),
            prescriptions: PrescriptionService::new(store.clone()),
            dashboard: DashboardService::new(store),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_patients,
        register_patient,
        list_doctors,
        register_doctor,
        list_appointments,
        schedule_appointment,
        list_prescriptions,
        create_prescription,
        get_dashboard,
        catalog_specializations,
        catalog_reasons,
        catalog_medications
    ),
    components(schemas(
        HealthRes,
        CreateRecordRes,
        RegisterPatientReq,
        EmergencyContact,
        MedicalHistory,
        RegisterDoctorReq,
        ScheduleAppointmentReq,
        CreatePrescriptionReq,
        MedicationEntry,
        ListPatientsRes,
        ListDoctorsRes,
        ListAppointmentsRes,
        ListPrescriptionsRes,
        CatalogRes,
        DashboardData,
        Stats,
        SpecialtyCount,
        MonthlyBucket,
        StatusCount
    ))
)]
struct ApiDoc;

/// Main entry point for the clinic administration backend.
///
/// Starts the REST server with OpenAPI documentation at `/swagger-ui`.
///
/// # Environment Variables
/// - `CLINIC_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CLINIC_DATA_DIR`: Directory for clinic data storage (default: "/clinic_data")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("CLINIC_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let data_dir =
        std::env::var("CLINIC_DATA_DIR").unwrap_or_else(|_| DEFAULT_CLINIC_DATA_DIR.into());

    tracing::info!("++ Starting clinic REST on {}", rest_addr);
    tracing::info!("++ Clinic data dir: {}", data_dir);

    let cfg = Arc::new(CoreConfig::new(PathBuf::from(data_dir))?);
    let state = AppState::new(DocumentStore::new(cfg));

    let rest_app = app(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, rest_app).await?;

    Ok(())
}

/// Builds the REST router. Kept separate from `main` so tests can drive the
/// router without binding a socket.
fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients))
        .route("/patients", post(register_patient))
        .route("/doctors", get(list_doctors))
        .route("/doctors", post(register_doctor))
        .route("/appointments", get(list_appointments))
        .route("/appointments", post(schedule_appointment))
        .route("/prescriptions", get(list_prescriptions))
        .route("/prescriptions", post(create_prescription))
        .route("/dashboard", get(get_dashboard))
        .route("/catalog/specializations", get(catalog_specializations))
        .route("/catalog/reasons", get(catalog_reasons))
        .route("/catalog/medications", get(catalog_medications))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Maps a core error onto an HTTP response, logging the details server-side.
fn error_response(context: &'static str, err: ClinicError) -> (StatusCode, &'static str) {
    match err {
        ClinicError::InvalidInput(ref reason) => {
            tracing::warn!("{} rejected: {}", context, reason);
            (StatusCode::BAD_REQUEST, "Invalid input")
        }
        other => {
            tracing::error!("{} error: {:?}", context, other);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "List of patient records", body = ListPatientsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Lists all patient records, ids included.
async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<ListPatientsRes>, (StatusCode, &'static str)> {
    match state.patients.list() {
        Ok(patients) => Ok(Json(ListPatientsRes { patients })),
        Err(e) => Err(error_response("list patients", e)),
    }
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = RegisterPatientReq,
    responses(
        (status = 201, description = "Patient registered", body = CreateRecordRes),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Registers a new patient record.
async fn register_patient(
    State(state): State<AppState>,
    Json(req): Json<RegisterPatientReq>,
) -> Result<(StatusCode, Json<CreateRecordRes>), (StatusCode, &'static str)> {
    match state.patients.register(req) {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(CreateRecordRes { id: id.to_string() }),
        )),
        Err(e) => Err(error_response("register patient", e)),
    }
}

#[utoipa::path(
    get,
    path = "/doctors",
    responses(
        (status = 200, description = "List of doctor records", body = ListDoctorsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Lists all doctor records, ids included.
async fn list_doctors(
    State(state): State<AppState>,
) -> Result<Json<ListDoctorsRes>, (StatusCode, &'static str)> {
    match state.doctors.list() {
        Ok(doctors) => Ok(Json(ListDoctorsRes { doctors })),
        Err(e) => Err(error_response("list doctors", e)),
    }
}

#[utoipa::path(
    post,
    path = "/doctors",
    request_body = RegisterDoctorReq,
    responses(
        (status = 201, description = "Doctor registered", body = CreateRecordRes),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Registers a new doctor record.
async fn register_doctor(
    State(state): State<AppState>,
    Json(req): Json<RegisterDoctorReq>,
) -> Result<(StatusCode, Json<CreateRecordRes>), (StatusCode, &'static str)> {
    match state.doctors.register(req) {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(CreateRecordRes { id: id.to_string() }),
        )),
        Err(e) => Err(error_response("register doctor", e)),
    }
}

#[utoipa::path(
    get,
    path = "/appointments",
    responses(
        (status = 200, description = "List of appointment records", body = ListAppointmentsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Lists all appointment records, ids included.
async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<ListAppointmentsRes>, (StatusCode, &'static str)> {
    match state.appointments.list() {
        Ok(appointments) => Ok(Json(ListAppointmentsRes { appointments })),
        Err(e) => Err(error_response("list appointments", e)),
    }
}

#[utoipa::path(
    post,
    path = "/appointments",
    request_body = ScheduleAppointmentReq,
    responses(
        (status = 201, description = "Appointment scheduled", body = CreateRecordRes),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Schedules a new appointment.
async fn schedule_appointment(
    State(state): State<AppState>,
    Json(req): Json<ScheduleAppointmentReq>,
) -> Result<(StatusCode, Json<CreateRecordRes>), (StatusCode, &'static str)> {
    match state.appointments.schedule(req) {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(CreateRecordRes { id: id.to_string() }),
        )),
        Err(e) => Err(error_response("schedule appointment", e)),
    }
}

#[utoipa::path(
    get,
    path = "/prescriptions",
    responses(
        (status = 200, description = "List of prescription records", body = ListPrescriptionsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Lists all prescription records, ids included.
async fn list_prescriptions(
    State(state): State<AppState>,
) -> Result<Json<ListPrescriptionsRes>, (StatusCode, &'static str)> {
    match state.prescriptions.list() {
        Ok(prescriptions) => Ok(Json(ListPrescriptionsRes { prescriptions })),
        Err(e) => Err(error_response("list prescriptions", e)),
    }
}

#[utoipa::path(
    post,
    path = "/prescriptions",
    request_body = CreatePrescriptionReq,
    responses(
        (status = 201, description = "Prescription created", body = CreateRecordRes),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Creates a new prescription.
async fn create_prescription(
    State(state): State<AppState>,
    Json(req): Json<CreatePrescriptionReq>,
) -> Result<(StatusCode, Json<CreateRecordRes>), (StatusCode, &'static str)> {
    match state.prescriptions.create(req) {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(CreateRecordRes { id: id.to_string() }),
        )),
        Err(e) => Err(error_response("create prescription", e)),
    }
}

#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Aggregated dashboard data", body = DashboardData),
        (status = 500, description = "Internal server error")
    )
)]
/// Returns the aggregated dashboard data.
///
/// Every request re-reads the four collections and recomputes the stats,
/// the specialization distribution, the monthly appointment breakdown, and
/// the appointment status distribution from scratch.
async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardData>, (StatusCode, &'static str)> {
    match state.dashboard.snapshot() {
        Ok(data) => Ok(Json(data)),
        Err(e) => Err(error_response("dashboard", e)),
    }
}

/// Query parameters accepted by the catalog endpoints.
#[derive(Debug, Deserialize)]
struct CatalogQuery {
    /// Case-insensitive containment filter; empty or absent keeps all entries.
    q: Option<String>,
}

fn catalog_response(entries: &[&str], query: &CatalogQuery) -> Json<CatalogRes> {
    let term = query.q.as_deref().unwrap_or("");
    Json(CatalogRes {
        entries: catalog::search(entries, term)
            .into_iter()
            .map(str::to_owned)
            .collect(),
    })
}

#[utoipa::path(
    get,
    path = "/catalog/specializations",
    params(("q" = Option<String>, Query, description = "Case-insensitive containment filter")),
    responses(
        (status = 200, description = "Matching specializations", body = CatalogRes)
    )
)]
/// Suggestion list for the doctor registration form.
async fn catalog_specializations(Query(query): Query<CatalogQuery>) -> Json<CatalogRes> {
    catalog_response(catalog::SPECIALIZATIONS, &query)
}

#[utoipa::path(
    get,
    path = "/catalog/reasons",
    params(("q" = Option<String>, Query, description = "Case-insensitive containment filter")),
    responses(
        (status = 200, description = "Matching visit reasons", body = CatalogRes)
    )
)]
/// Suggestion list for the appointment scheduling form.
async fn catalog_reasons(Query(query): Query<CatalogQuery>) -> Json<CatalogRes> {
    catalog_response(catalog::APPOINTMENT_REASONS, &query)
}

#[utoipa::path(
    get,
    path = "/catalog/medications",
    params(("q" = Option<String>, Query, description = "Case-insensitive containment filter")),
    responses(
        (status = 200, description = "Matching medications", body = CatalogRes)
    )
)]
/// Suggestion list for the prescription form.
async fn catalog_medications(Query(query): Query<CatalogQuery>) -> Json<CatalogRes> {
    catalog_response(catalog::COMMON_MEDICATIONS, &query)
}
