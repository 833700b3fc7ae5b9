use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::domain::{Product, UserInfo};
use crate::services::product_actions;
use crate::services::ProductApi;
use crate::store::{Action, AppState, Command, Dispatcher, RequestStatus, StoreReader};

/// Application store provided as Dioxus context.
///
/// Reads go through the signal, so components and effects that use the
/// selectors re-run when the state changes. Async commands are spawned on the
/// Dioxus executor and report back through [`Store::apply`].
#[derive(Clone)]
pub struct Store {
    state: Signal<AppState>,
    api: Rc<dyn ProductApi>,
}

impl Store {
    pub fn new(state: Signal<AppState>, api: Rc<dyn ProductApi>) -> Self {
        Self { state, api }
    }

    pub fn state(&self) -> Signal<AppState> {
        self.state
    }

    pub fn apply(&self, action: Action) {
        let mut state = self.state;
        state.write().reduce(action);
    }

    fn access_token(&self) -> Option<String> {
        self.state
            .peek()
            .user_info
            .as_ref()
            .and_then(|user| user.token().map(str::to_string))
    }
}

impl StoreReader for Store {
    fn product_details(&self) -> RequestStatus<Product> {
        self.state.read().product_details.clone()
    }

    fn user_info(&self) -> Option<UserInfo> {
        self.state.read().user_info.clone()
    }

    fn product_delete(&self) -> RequestStatus<()> {
        self.state.read().product_delete.clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, command: Command) {
        debug!(command = ?command, "Dispatching command");

        self.apply(command.immediate_action());

        match command {
            Command::Reset(_) => {}
            Command::FetchProduct(id) => {
                let store = self.clone();
                spawn(async move {
                    let api = store.api.clone();
                    product_actions::fetch_product(api.as_ref(), &id, |action| store.apply(action))
                        .await;
                });
            }
            Command::DeleteProduct(id) => {
                let store = self.clone();
                let token = self.access_token();
                spawn(async move {
                    let api = store.api.clone();
                    product_actions::delete_product(api.as_ref(), &id, token.as_deref(), |action| {
                        store.apply(action)
                    })
                    .await;
                });
            }
        }
    }
}
