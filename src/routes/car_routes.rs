use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use crate::controllers::car_controller::CarController;
use crate::dto::car_dto::{CreateCarRequest, CreateCarResponse, ReturnCarRequest};
use crate::models::Car;
use crate::services::RentalService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::ValidatedJson;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars))
        .route("/add", post(add_car))
        .route("/:registration/rentals", post(rent_car))
        .route("/:registration/returns", post(return_car))
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, AppError> {
    let controller = CarController::new(state.cars.clone());
    let cars = controller.list().await?;
    Ok(Json(cars))
}

async fn add_car(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCarRequest>,
) -> Result<Json<CreateCarResponse>, AppError> {
    let controller = CarController::new(state.cars.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn rent_car(
    State(state): State<AppState>,
    Path(registration): Path<String>,
) -> Result<Json<Car>, AppError> {
    let service = RentalService::new(state.cars.clone());
    let car = service.rent(&registration).await?;
    Ok(Json(car))
}

async fn return_car(
    State(state): State<AppState>,
    Path(registration): Path<String>,
    ValidatedJson(request): ValidatedJson<ReturnCarRequest>,
) -> Result<Json<Car>, AppError> {
    let service = RentalService::new(state.cars.clone());
    let car = service.return_car(&registration, request.kilometers_driven).await?;
    Ok(Json(car))
}
