// Test doubles for the store and browser capabilities, shared with the
// integration tests.

use std::cell::RefCell;

use crate::domain::{Product, Stock, UserInfo};
use crate::store::{AppState, Command, Dispatcher, RequestStatus, StoreReader};
use crate::ui_dioxus::platform::{Navigate, Notify};
use crate::ui_dioxus::router::Route;

pub fn sample_product() -> Product {
    Product {
        description: "Breathable summer shirt".to_string(),
        image: Some("/images/linen.png".to_string()),
        stock: Stock::Count(3),
        ..Product::new("7", "Linen Shirt", 499.0)
    }
}

pub fn customer_user() -> UserInfo {
    UserInfo {
        id: 2,
        username: "ravi".to_string(),
        email: "ravi@example.com".to_string(),
        name: "Ravi".to_string(),
        admin: false,
        is_admin_flag: false,
        token: Some("customer-token".to_string()),
        access: None,
    }
}

pub fn admin_user() -> UserInfo {
    UserInfo {
        id: 1,
        username: "asha".to_string(),
        email: "asha@example.com".to_string(),
        name: "Asha".to_string(),
        admin: true,
        is_admin_flag: false,
        token: Some("admin-token".to_string()),
        access: None,
    }
}

#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    commands: RefCell<Vec<Command>>,
}

impl RecordingDispatcher {
    pub fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }

    pub fn clear(&self) {
        self.commands.borrow_mut().clear();
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&self, command: Command) {
        self.commands.borrow_mut().push(command);
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigate for RecordingNavigator {
    fn push(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notify for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// `StoreReader` over a fixed snapshot of the state.
#[derive(Debug, Clone, Default)]
pub struct StaticStore {
    state: AppState,
}

impl StaticStore {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl StoreReader for StaticStore {
    fn product_details(&self) -> RequestStatus<Product> {
        self.state.product_details.clone()
    }

    fn user_info(&self) -> Option<UserInfo> {
        self.state.user_info.clone()
    }

    fn product_delete(&self) -> RequestStatus<()> {
        self.state.product_delete.clone()
    }
}
