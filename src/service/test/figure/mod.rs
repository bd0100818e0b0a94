use crate::error::AppError;
use crate::model::figure::{CreateFigureParams, UpdateFigureParams};
use crate::service::figure::FigureService;
use entity::Side;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_country;
