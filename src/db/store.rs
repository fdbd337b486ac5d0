// src/db/store.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{
    lead::{Lead, NewLead, UpdateLead},
    message::{Message, NewMessage, UpdateMessage},
    property::{NewProperty, Property, UpdateProperty},
    sale::{NewSale, Sale, UpdateSale},
};

// =========================================================================
//  O CONTRATO DE CADA ENTIDADE
// =========================================================================

/// O que uma entidade precisa informar para morar numa `Table`:
/// como montar o registro a partir do pedido de criação (a tabela de padrões),
/// como aplicar uma atualização parcial e em qual tabela ela fica.
pub trait Record: Clone + Send + Sync + 'static {
    type New: Send;
    type Patch: Send;

    fn build(id: i32, new: Self::New) -> Self;
    fn apply(&mut self, patch: Self::Patch);

    fn table(tables: &Tables) -> &Table<Self>;
    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;
}

// =========================================================================
//  TABELA: coleção por id + contador
// =========================================================================

/// Os ids saem de um contador que só cresce, então a ordem das chaves
/// do `BTreeMap` é a ordem de inserção.
#[derive(Debug)]
pub struct Table<R> {
    rows: BTreeMap<i32, R>,
    next_id: i32,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self { rows: BTreeMap::new(), next_id: 1 }
    }
}

impl<R: Record> Table<R> {
    pub fn list(&self) -> Vec<R> {
        self.rows.values().cloned().collect()
    }

    pub fn get(&self, id: i32) -> Option<R> {
        self.find(id).cloned()
    }

    /// Igual ao `get`, sem clonar; para leituras dentro de um lock já aberto.
    pub fn find(&self, id: i32) -> Option<&R> {
        self.rows.get(&id)
    }

    /// Reserva o próximo id (nunca reaproveitado, nem depois de um delete).
    pub fn insert(&mut self, new: R::New) -> R {
        let id = self.next_id;
        self.next_id += 1;

        let record = R::build(id, new);
        self.rows.insert(id, record.clone());
        record
    }

    pub fn update(&mut self, id: i32, patch: R::Patch) -> Option<R> {
        let record = self.rows.get_mut(&id)?;
        record.apply(patch);
        Some(record.clone())
    }

    pub fn remove(&mut self, id: i32) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }
}

// =========================================================================
//  O STORE: as quatro tabelas atrás de um único lock
// =========================================================================

#[derive(Debug, Default)]
pub struct Tables {
    pub leads: Table<Lead>,
    pub properties: Table<Property>,
    pub sales: Table<Sale>,
    pub messages: Table<Message>,
}

/// Estado em memória do processo inteiro. É criado uma vez no `AppState`
/// e clonado para os repositórios (o clone compartilha as mesmas tabelas).
///
/// Toda operação segura o lock do começo ao fim, então uma escrita nunca
/// é vista pela metade.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    tables: Arc<RwLock<Tables>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}

// =========================================================================
//  REGISTROS
// =========================================================================

impl Record for Lead {
    type New = NewLead;
    type Patch = UpdateLead;

    fn build(id: i32, new: NewLead) -> Self {
        Lead::from_new(id, new)
    }

    fn apply(&mut self, patch: UpdateLead) {
        Lead::apply(self, patch)
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.leads
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.leads
    }
}

impl Record for Property {
    type New = NewProperty;
    type Patch = UpdateProperty;

    fn build(id: i32, new: NewProperty) -> Self {
        Property::from_new(id, new)
    }

    fn apply(&mut self, patch: UpdateProperty) {
        Property::apply(self, patch)
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.properties
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.properties
    }
}

impl Record for Sale {
    type New = NewSale;
    type Patch = UpdateSale;

    fn build(id: i32, new: NewSale) -> Self {
        Sale::from_new(id, new)
    }

    fn apply(&mut self, patch: UpdateSale) {
        Sale::apply(self, patch)
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.sales
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.sales
    }
}

impl Record for Message {
    type New = NewMessage;
    type Patch = UpdateMessage;

    // O horário da mensagem é sempre o do servidor
    fn build(id: i32, new: NewMessage) -> Self {
        Message::from_new(id, new, Utc::now())
    }

    fn apply(&mut self, patch: UpdateMessage) {
        Message::apply(self, patch)
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.messages
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lead::LeadStatus;
    use crate::models::patch::Patch;

    fn lead(name: &str) -> NewLead {
        NewLead {
            name: name.to_string(),
            phone: "11999998888".to_string(),
            origin: "Indicação".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn ids_start_at_one_and_are_never_reused() {
        let mut table: Table<Lead> = Table::default();

        let first = table.insert(lead("Ana"));
        let second = table.insert(lead("Bruno"));
        assert!(table.remove(second.id));
        let third = table.insert(lead("Carla"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut table: Table<Lead> = Table::default();
        for name in ["Ana", "Bruno", "Carla"] {
            table.insert(lead(name));
        }
        table.remove(2);

        let names: Vec<String> = table.list().into_iter().map(|l| l.name).collect();
        assert_eq!(names, ["Ana", "Carla"]);
    }

    #[test]
    fn update_of_unknown_id_changes_nothing() {
        let mut table: Table<Lead> = Table::default();
        table.insert(lead("Ana"));

        let patch = UpdateLead { status: Patch::Value(LeadStatus::Arquivado), ..Default::default() };
        assert!(table.update(42, patch).is_none());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1).map(|l| l.status), Some(LeadStatus::Novo));
    }

    #[test]
    fn second_remove_returns_false() {
        let mut table: Table<Lead> = Table::default();
        let created = table.insert(lead("Ana"));

        assert!(table.remove(created.id));
        assert!(table.get(created.id).is_none());
        assert!(!table.remove(created.id));
        assert_eq!(table.len(), 0);
    }

    #[tokio::test]
    async fn clones_share_the_same_tables() {
        let store = EntityStore::new();
        let other = store.clone();

        store.write().await.leads.insert(lead("Ana"));

        assert_eq!(other.read().await.leads.len(), 1);
    }
}
