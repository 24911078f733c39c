use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: u64,
    pub employee_name: String,
    pub employee_age: u32,
    pub employee_salary: u64,
    pub profile_image: String,
}

/// Body accepted by both create and update. An `id` in the body is ignored.
#[derive(Deserialize)]
pub struct EmployeeFields {
    pub employee_name: String,
    pub employee_age: u32,
    pub employee_salary: u64,
    pub profile_image: String,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    employees: BTreeMap<u64, Employee>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let api = Router::new()
        .route("/employees", get(list_employees))
        .route("/employee/{id}", get(get_employee))
        .route("/create", post(create_employee))
        .route("/update/{id}", put(update_employee))
        .route("/delete/{id}", delete(delete_employee))
        .with_state(db);
    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock employee API listening");
    }
    axum::serve(listener, app()).await
}

async fn list_employees(State(db): State<Db>) -> Json<Vec<Employee>> {
    let store = db.read().await;
    Json(store.employees.values().cloned().collect())
}

async fn create_employee(
    State(db): State<Db>,
    Json(input): Json<EmployeeFields>,
) -> (StatusCode, Json<Employee>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let employee = Employee {
        id: store.next_id,
        employee_name: input.employee_name,
        employee_age: input.employee_age,
        employee_salary: input.employee_salary,
        profile_image: input.profile_image,
    };
    store.employees.insert(employee.id, employee.clone());
    info!(id = employee.id, "employee created");
    (StatusCode::CREATED, Json(employee))
}

async fn get_employee(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Employee>, StatusCode> {
    let store = db.read().await;
    store.employees.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_employee(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<EmployeeFields>,
) -> Result<Json<Employee>, StatusCode> {
    let mut store = db.write().await;
    let employee = store.employees.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    employee.employee_name = input.employee_name;
    employee.employee_age = input.employee_age;
    employee.employee_salary = input.employee_salary;
    employee.profile_image = input.profile_image;
    Ok(Json(employee.clone()))
}

async fn delete_employee(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .employees
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
