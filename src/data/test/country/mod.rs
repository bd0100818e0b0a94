use crate::data::country::CountryRepository;
use crate::model::country::{CreateCountryParams, UpdateCountryParams};
use entity::Side;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
