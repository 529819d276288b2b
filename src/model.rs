use serde::{Deserialize, Serialize};

use crate::models::active_clients::ActiveClients;
use crate::models::notification_composer::NotificationComposer;
use crate::models::requests_feed::RequestsFeed;
use crate::runtime::msg::Msg;
use crate::runtime::{Effect, Env, Model, Update};

/// Every model of the dashboard page, updated as one unit.
#[derive(Default, Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub active_clients: ActiveClients,
    pub requests_feed: RequestsFeed,
    pub notification_composer: NotificationComposer,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum AdminDashboardField {
    ActiveClients,
    RequestsFeed,
    NotificationComposer,
}

impl<E: Env + 'static> Model<E> for AdminDashboard {
    type Field = AdminDashboardField;

    fn update(&mut self, msg: &Msg) -> (Vec<Effect>, Vec<Self::Field>) {
        let mut fields = vec![];
        let active_clients_effects = Update::<E>::update(&mut self.active_clients, msg);
        if active_clients_effects.has_changed {
            fields.push(AdminDashboardField::ActiveClients);
        }
        let requests_feed_effects = Update::<E>::update(&mut self.requests_feed, msg);
        if requests_feed_effects.has_changed {
            fields.push(AdminDashboardField::RequestsFeed);
        }
        let notification_composer_effects =
            Update::<E>::update(&mut self.notification_composer, msg);
        if notification_composer_effects.has_changed {
            fields.push(AdminDashboardField::NotificationComposer);
        }
        let effects = active_clients_effects
            .join(requests_feed_effects)
            .join(notification_composer_effects);
        (effects.into_iter().collect(), fields)
    }

    fn update_field(&mut self, msg: &Msg, field: &Self::Field) -> (Vec<Effect>, Vec<Self::Field>) {
        let effects = match field {
            AdminDashboardField::ActiveClients => {
                Update::<E>::update(&mut self.active_clients, msg)
            }
            AdminDashboardField::RequestsFeed => Update::<E>::update(&mut self.requests_feed, msg),
            AdminDashboardField::NotificationComposer => {
                Update::<E>::update(&mut self.notification_composer, msg)
            }
        };
        let fields = if effects.has_changed {
            vec![*field]
        } else {
            vec![]
        };
        (effects.into_iter().collect(), fields)
    }
}
