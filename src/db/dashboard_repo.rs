// src/db/dashboard_repo.rs

use crate::{
    db::store::EntityStore,
    models::{
        dashboard::DashboardMetrics,
        message::Sender,
        property::PropertyStatus,
        sale::SaleStatus,
    },
};

#[derive(Debug, Clone)]
pub struct DashboardRepository {
    store: EntityStore,
}

impl DashboardRepository {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    /// As quatro contagens saem do mesmo lock de leitura,
    /// então formam uma foto consistente das tabelas.
    pub async fn metrics(&self) -> DashboardMetrics {
        let tables = self.store.read().await;

        DashboardMetrics {
            new_leads: tables.leads.len(),
            closed_sales: tables
                .sales
                .values()
                .filter(|s| s.status == SaleStatus::Finalizada)
                .count(),
            active_properties: tables
                .properties
                .values()
                .filter(|p| p.status == PropertyStatus::Disponivel)
                .count(),
            messages_sent: tables
                .messages
                .values()
                .filter(|m| m.sender == Sender::User)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{MessageRepository, PropertyRepository, Repository};
    use crate::models::{
        message::{NewMessage, UpdateMessage},
        patch::Patch,
        property::{NewProperty, Property, UpdateProperty},
    };

    fn property(status: Option<PropertyStatus>) -> NewProperty {
        NewProperty {
            title: "Studio".into(),
            property_type: "Apartamento".into(),
            sale_price: "320000".into(),
            address: "Rua Augusta, 900".into(),
            status,
            ..Default::default()
        }
    }

    async fn active_count(repo: &Repository<Property>) -> usize {
        repo.list().await.iter().filter(|p| p.status == PropertyStatus::Disponivel).count()
    }

    #[tokio::test]
    async fn empty_store_has_zero_metrics() {
        let dashboard = DashboardRepository::new(EntityStore::new());
        assert_eq!(dashboard.metrics().await, DashboardMetrics::default());
    }

    #[tokio::test]
    async fn selling_a_property_decreases_active_properties() {
        let store = EntityStore::new();
        let properties = PropertyRepository::new(store.clone());
        let dashboard = DashboardRepository::new(store);

        let created = properties.create(property(None)).await;
        assert_eq!(created.status, PropertyStatus::Disponivel);
        let before = dashboard.metrics().await.active_properties;

        let patch = UpdateProperty { status: Patch::Value(PropertyStatus::Vendido), ..Default::default() };
        properties.update(created.id, patch).await;

        assert_eq!(dashboard.metrics().await.active_properties, before - 1);
    }

    #[tokio::test]
    async fn active_properties_follow_any_sequence_of_changes() {
        let store = EntityStore::new();
        let properties = PropertyRepository::new(store.clone());
        let dashboard = DashboardRepository::new(store);

        let a = properties.create(property(None)).await;
        properties.create(property(Some(PropertyStatus::Reservado))).await;
        let c = properties.create(property(Some(PropertyStatus::Disponivel))).await;
        properties.create(property(None)).await;
        assert_eq!(dashboard.metrics().await.active_properties, active_count(&properties).await);

        properties.delete(a.id).await;
        let patch = UpdateProperty { status: Patch::Value(PropertyStatus::Reservado), ..Default::default() };
        properties.update(c.id, patch).await;
        properties.update(2, UpdateProperty { status: Patch::Null, ..Default::default() }).await;

        let metrics = dashboard.metrics().await;
        assert_eq!(metrics.active_properties, active_count(&properties).await);
        assert_eq!(metrics.active_properties, 2);
    }

    #[tokio::test]
    async fn only_messages_from_the_broker_count_as_sent() {
        let store = EntityStore::new();
        let messages = MessageRepository::new(store.clone());
        let dashboard = DashboardRepository::new(store);

        for (sender, content) in [
            (Sender::User, "Bom dia, Ana!"),
            (Sender::Client, "Bom dia! Ainda tem o apartamento?"),
            (Sender::User, "Tem sim, quer visitar?"),
            (Sender::Client, "Quero."),
        ] {
            let new = NewMessage { lead_id: 1, content: content.into(), sender, message_type: None };
            messages.create(new).await;
        }
        assert_eq!(dashboard.metrics().await.messages_sent, 2);

        let patch = UpdateMessage { sender: Patch::Value(Sender::User), ..Default::default() };
        messages.update(4, patch).await;
        messages.delete(1).await;

        let metrics = dashboard.metrics().await;
        assert_eq!(metrics.messages_sent, 2);
        assert_eq!(metrics.new_leads, 0);
    }
}
