// src/db/repository.rs

use std::marker::PhantomData;

use crate::{
    db::store::{EntityStore, Record},
    models::{lead::Lead, message::Message, property::Property, sale::Sale},
};

/// CRUD genérico sobre uma tabela do `EntityStore`.
///
/// Ausência nunca é erro aqui: `get`/`update` devolvem `None` e `delete`
/// devolve `false`. Quem transforma isso em 404 é o service.
#[derive(Debug, Clone)]
pub struct Repository<R> {
    store: EntityStore,
    _record: PhantomData<fn() -> R>,
}

pub type LeadRepository = Repository<Lead>;
pub type PropertyRepository = Repository<Property>;
pub type SaleRepository = Repository<Sale>;
pub type MessageRepository = Repository<Message>;

impl<R: Record> Repository<R> {
    pub fn new(store: EntityStore) -> Self {
        Self { store, _record: PhantomData }
    }

    pub async fn list(&self) -> Vec<R> {
        R::table(&*self.store.read().await).list()
    }

    pub async fn get(&self, id: i32) -> Option<R> {
        R::table(&*self.store.read().await).get(id)
    }

    pub async fn create(&self, new: R::New) -> R {
        R::table_mut(&mut *self.store.write().await).insert(new)
    }

    pub async fn update(&self, id: i32, patch: R::Patch) -> Option<R> {
        R::table_mut(&mut *self.store.write().await).update(id, patch)
    }

    pub async fn delete(&self, id: i32) -> bool {
        R::table_mut(&mut *self.store.write().await).remove(id)
    }
}

impl Repository<Message> {
    /// Conversa de um lead, na ordem em que as mensagens chegaram
    pub async fn list_by_lead(&self, lead_id: i32) -> Vec<Message> {
        self.store
            .read()
            .await
            .messages
            .values()
            .filter(|m| m.lead_id == lead_id)
            .cloned()
            .collect()
    }
}

/// Uma venda com o título do imóvel e o nome do lead, quando ainda existem.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRow {
    pub sale: Sale,
    pub property_title: Option<String>,
    pub lead_name: Option<String>,
}

/// Tudo que o relatório de vendas precisa, lido de uma vez só.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSnapshot {
    pub rows: Vec<SaleRow>,
    pub lead_count: usize,
}

impl Repository<Sale> {
    pub async fn snapshot_with_references(&self) -> SalesSnapshot {
        let tables = self.store.read().await;

        let rows = tables
            .sales
            .values()
            .map(|sale| SaleRow {
                property_title: tables.properties.find(sale.property_id).map(|p| p.title.clone()),
                lead_name: tables.leads.find(sale.lead_id).map(|l| l.name.clone()),
                sale: sale.clone(),
            })
            .collect();

        SalesSnapshot { rows, lead_count: tables.leads.len() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::models::{
        lead::{LeadStatus, NewLead, UpdateLead},
        message::{MessageType, NewMessage, Sender},
        patch::Patch,
        property::{NewProperty, PropertyStatus},
        sale::{NewSale, SaleStatus},
    };

    fn ana() -> NewLead {
        NewLead {
            name: "Ana Silva".to_string(),
            phone: "11999998888".to_string(),
            origin: "Site Institucional".to_string(),
            ..Default::default()
        }
    }

    fn message(lead_id: i32, content: &str) -> NewMessage {
        NewMessage { lead_id, content: content.to_string(), sender: Sender::User, message_type: None }
    }

    #[tokio::test]
    async fn create_then_get_returns_the_same_record() {
        let repo = LeadRepository::new(EntityStore::new());

        let created = repo.create(ana()).await;
        let fetched = repo.get(created.id).await;

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn ana_silva_scenario() {
        let repo = LeadRepository::new(EntityStore::new());

        let first = repo.create(ana()).await;
        assert_eq!(first.id, 1);
        assert_eq!(first.status, LeadStatus::Novo);
        assert!(first.interest_regions.is_empty());

        let second = repo.create(NewLead { name: "Bruno Costa".into(), ..ana() }).await;
        assert_eq!(second.id, 2);

        assert!(repo.delete(1).await);
        let remaining = repo.list().await;
        assert_eq!(remaining, vec![second]);
    }

    #[tokio::test]
    async fn update_changes_only_the_given_field() {
        let repo = LeadRepository::new(EntityStore::new());
        let created = repo.create(NewLead { email: Some("ana@exemplo.com".into()), ..ana() }).await;

        let patch = UpdateLead { phone: Patch::Value("11888887777".into()), ..Default::default() };
        let updated = repo.update(created.id, patch).await.unwrap();

        let mut expected = created.clone();
        expected.phone = "11888887777".into();
        assert_eq!(updated, expected);
    }

    #[tokio::test]
    async fn update_of_missing_lead_returns_none() {
        let repo = LeadRepository::new(EntityStore::new());
        repo.create(ana()).await;

        assert!(repo.update(99, UpdateLead::default()).await.is_none());
        assert_eq!(repo.list().await.len(), 1);
    }

    #[tokio::test]
    async fn messages_are_filtered_by_lead_in_order() {
        let store = EntityStore::new();
        let repo = MessageRepository::new(store);

        repo.create(message(1, "primeira")).await;
        repo.create(message(2, "de outro lead")).await;
        repo.create(message(1, "segunda")).await;

        let conversation: Vec<String> = repo.list_by_lead(1).await.into_iter().map(|m| m.content).collect();
        assert_eq!(conversation, ["primeira", "segunda"]);
        assert!(repo.list_by_lead(3).await.is_empty());
    }

    #[tokio::test]
    async fn collections_have_independent_counters() {
        let store = EntityStore::new();
        let leads = LeadRepository::new(store.clone());
        let messages = MessageRepository::new(store);

        leads.create(ana()).await;
        leads.create(ana()).await;
        let first_message = messages.create(message(1, "oi")).await;

        assert_eq!(first_message.id, 1);
    }

    #[tokio::test]
    async fn property_round_trip_and_ids() {
        let repo = PropertyRepository::new(EntityStore::new());
        let new = || NewProperty {
            title: "Casa térrea".into(),
            property_type: "Casa".into(),
            sale_price: "480000.00".into(),
            address: "Rua das Flores, 123".into(),
            ..Default::default()
        };

        let first = repo.create(new()).await;
        assert!(repo.delete(first.id).await);
        let second = repo.create(new()).await;

        assert_eq!(second.id, first.id + 1);
        assert_eq!(second.status, PropertyStatus::Disponivel);
        assert_eq!(repo.get(second.id).await, Some(second));
    }

    #[tokio::test]
    async fn sale_round_trip_and_ids() {
        let repo = SaleRepository::new(EntityStore::new());
        let new = || NewSale {
            property_id: 7,
            lead_id: 3,
            sale_price: "650000.00".into(),
            commission: "39000.00".into(),
            sale_date: Utc.with_ymd_and_hms(2024, 3, 15, 14, 0, 0).unwrap(),
            status: None,
        };

        let first = repo.create(new()).await;
        assert!(repo.delete(first.id).await);
        let second = repo.create(new()).await;

        assert_eq!(second.id, first.id + 1);
        assert_eq!(second.status, SaleStatus::EmProcesso);
        assert_eq!(repo.get(second.id).await, Some(second));
    }

    #[tokio::test]
    async fn message_round_trip_and_ids() {
        let repo = MessageRepository::new(EntityStore::new());

        let first = repo.create(message(1, "oi")).await;
        assert!(repo.delete(first.id).await);
        let second = repo.create(message(1, "tudo bem?")).await;

        assert_eq!(second.id, first.id + 1);
        assert_eq!(second.message_type, MessageType::Text);
        assert_eq!(repo.get(second.id).await, Some(second));
    }

    #[tokio::test]
    async fn sales_snapshot_resolves_what_still_exists() {
        let store = EntityStore::new();
        let leads = LeadRepository::new(store.clone());
        let sales = SaleRepository::new(store);

        let lead = leads.create(ana()).await;
        leads.create(NewLead { name: "Bruno Costa".into(), ..ana() }).await;
        let sale = sales
            .create(NewSale {
                property_id: 9,
                lead_id: lead.id,
                sale_price: "300000".into(),
                commission: "18000".into(),
                sale_date: Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap(),
                status: Some(SaleStatus::Finalizada),
            })
            .await;

        let snapshot = sales.snapshot_with_references().await;

        assert_eq!(snapshot.lead_count, 2);
        assert_eq!(
            snapshot.rows,
            vec![SaleRow { sale, property_title: None, lead_name: Some("Ana Silva".into()) }]
        );
    }
}
