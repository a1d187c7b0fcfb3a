//! Assembles the `/api` router from port implementations.

use axum::Router;
use std::sync::Arc;

use crate::application::handlers::{
    AddCounterpartHandler, AddNextActionHandler, CompleteNextActionHandler, DeleteCustomerHandler,
    DeleteMeetingHandler, EditMeetingHandler, GetCustomerListHandler, GetCustomerTimelineHandler,
    GetDashboardHandler, ListUsersHandler, RecordMeetingHandler, RemoveCounterpartHandler,
    SaveCustomerHandler, SendTestNotificationHandler, SharedSettings, UpdateSlackWebhookHandler,
};
use crate::application::CustomerListView;
use crate::ports::{
    CounterpartRepository, CustomerReader, CustomerRepository, MeetingRepository,
    NextActionRepository, SettingsStore, SlackNotifier,
};

use super::customers::{customer_routes, CustomerHandlers};
use super::dashboard::{dashboard_routes, DashboardHandlers};
use super::engagement::{engagement_routes, EngagementHandlers};
use super::settings::{settings_routes, SettingsHandlers};

/// Port implementations the API runs on.
#[derive(Clone)]
pub struct ApiServices {
    pub reader: Arc<dyn CustomerReader>,
    pub customers: Arc<dyn CustomerRepository>,
    pub meetings: Arc<dyn MeetingRepository>,
    pub counterparts: Arc<dyn CounterpartRepository>,
    pub next_actions: Arc<dyn NextActionRepository>,
    pub notifier: Arc<dyn SlackNotifier>,
    pub settings_store: Arc<dyn SettingsStore>,
    pub settings: SharedSettings,
}

/// Builds every handler and mounts all routes under `/api`.
pub fn api_router(services: ApiServices) -> Router {
    let list_handler = Arc::new(GetCustomerListHandler::new(services.reader.clone()));

    let customers = CustomerHandlers::new(
        Arc::new(CustomerListView::new(list_handler)),
        Arc::new(SaveCustomerHandler::new(services.customers.clone())),
        Arc::new(DeleteCustomerHandler::new(services.customers.clone())),
        Arc::new(GetCustomerTimelineHandler::new(services.reader.clone())),
        Arc::new(ListUsersHandler::new(services.reader.clone())),
    );

    let engagement = EngagementHandlers {
        record_meeting: Arc::new(RecordMeetingHandler::new(services.meetings.clone())),
        edit_meeting: Arc::new(EditMeetingHandler::new(services.meetings.clone())),
        delete_meeting: Arc::new(DeleteMeetingHandler::new(services.meetings.clone())),
        add_counterpart: Arc::new(AddCounterpartHandler::new(services.counterparts.clone())),
        remove_counterpart: Arc::new(RemoveCounterpartHandler::new(services.counterparts.clone())),
        add_next_action: Arc::new(AddNextActionHandler::new(services.next_actions.clone())),
        complete_next_action: Arc::new(CompleteNextActionHandler::new(
            services.next_actions.clone(),
        )),
    };

    let dashboard = DashboardHandlers::new(Arc::new(GetDashboardHandler::new(services.reader)));

    let settings = SettingsHandlers::new(
        Arc::new(UpdateSlackWebhookHandler::new(
            services.settings_store,
            services.settings.clone(),
        )),
        Arc::new(SendTestNotificationHandler::new(
            services.notifier,
            services.settings,
        )),
    );

    let api = Router::new()
        .merge(customer_routes(customers))
        .merge(engagement_routes(engagement))
        .merge(dashboard_routes(dashboard))
        .merge(settings_routes(settings));

    Router::new().nest("/api", api)
}
