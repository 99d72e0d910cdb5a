use crate::error::VacschedError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use vacsched_api_structs::get_calendar_view::*;
use vacsched_domain::{build_view, expand_window, CalendarMode, CalendarView, ID};
use vacsched_infra::VacschedContext;

pub async fn get_calendar_view_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<VacschedContext>,
) -> Result<HttpResponse, VacschedError> {
    let usecase = GetCalendarViewUseCase {
        user_id: path_params.user_id.clone(),
        window_start: query_params.window_start,
        window_end: query_params.window_end,
        mode: query_params.mode,
    };

    execute(usecase, &ctx)
        .await
        .map(|view| HttpResponse::Ok().json(APIResponse::new(view)))
        .map_err(VacschedError::from)
}

#[derive(Debug)]
pub struct GetCalendarViewUseCase {
    pub user_id: ID,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub mode: CalendarMode,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidWindow(String),
}

impl From<UseCaseError> for VacschedError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidWindow(msg) => Self::BadClientData(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCalendarViewUseCase {
    type Response = CalendarView;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCalendarView";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        if self.window_start > self.window_end {
            return Err(UseCaseError::InvalidWindow(format!(
                "Window start {} is after window end {}",
                self.window_start, self.window_end
            )));
        }
        let window_days = (self.window_end - self.window_start).num_days();
        if window_days > ctx.config.calendar_query_days_limit {
            return Err(UseCaseError::InvalidWindow(format!(
                "Window of {} days exceeds the maximum of {} days",
                window_days, ctx.config.calendar_query_days_limit
            )));
        }

        // Fetch against the grid-aligned window so month views include the
        // leading and trailing days of adjacent months
        let (start, end) = expand_window(self.mode, self.window_start, self.window_end);
        let reminders = ctx
            .repos
            .reminders
            .find_by_user_in_range(&self.user_id, start, end)
            .await;

        Ok(build_view(
            &reminders,
            self.window_start,
            self.window_end,
            self.mode,
            ctx.sys.get_datetime(),
        ))
    }
}
