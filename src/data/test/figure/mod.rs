use crate::data::figure::FigureRepository;
use crate::model::figure::{CreateFigureParams, UpdateFigureParams};
use entity::Side;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_side;
mod update;
