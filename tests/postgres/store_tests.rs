//! Store contract tests over the `PostgreSQL` session.

use crate::postgres::helpers::{SchemaContext, schema_context};
use message_board::board::{
    adapters::postgres::PostgresSession,
    domain::{Message, MessageId},
    services::{MessageStore, MessageStoreError},
    validation::ValidationConfig,
};
use rstest::rstest;

type PgStore = MessageStore<PostgresSession>;

fn sorted(mut messages: Vec<Message>) -> Vec<Message> {
    messages.sort_by_key(Message::id);
    messages
}

async fn open_store(context: &SchemaContext) -> PgStore {
    MessageStore::open(&context.database, ValidationConfig::default())
        .await
        .expect("open store")
}

#[rstest]
#[ignore = "requires PostgreSQL via MESSAGE_BOARD_TEST_DATABASE_URL"]
fn seeded_messages_are_listed(#[from(schema_context)] context: SchemaContext) {
    context.rt.block_on(async {
        let mut store = open_store(&context).await;
        store.seed().await.expect("seed");

        let messages = store.get_all_messages().await.expect("list");

        assert_eq!(sorted(messages), PgStore::get_seed_messages());
    });
}

#[rstest]
#[ignore = "requires PostgreSQL via MESSAGE_BOARD_TEST_DATABASE_URL"]
fn added_message_is_found_by_id(#[from(schema_context)] context: SchemaContext) {
    context.rt.block_on(async {
        let mut store = open_store(&context).await;
        let expected = Message::new(10, "Message");

        store.add_message(expected.clone()).await.expect("add");

        let found = store.find_message(MessageId::new(10)).await.expect("find");
        assert_eq!(found, Some(expected));
    });
}

#[rstest]
#[ignore = "requires PostgreSQL via MESSAGE_BOARD_TEST_DATABASE_URL"]
fn duplicate_id_is_a_conflict(#[from(schema_context)] context: SchemaContext) {
    context.rt.block_on(async {
        let mut store = open_store(&context).await;
        store.seed().await.expect("seed");

        let result = store.add_message(Message::new(2, "again")).await;

        assert!(matches!(
            result,
            Err(MessageStoreError::Conflict(id)) if id == MessageId::new(2)
        ));
    });
}

#[rstest]
#[ignore = "requires PostgreSQL via MESSAGE_BOARD_TEST_DATABASE_URL"]
fn deleting_seeded_message_keeps_the_rest(#[from(schema_context)] context: SchemaContext) {
    context.rt.block_on(async {
        let mut store = open_store(&context).await;
        store.seed().await.expect("seed");

        store.delete_message(MessageId::new(1)).await.expect("delete");

        let remaining: Vec<i32> = sorted(store.get_all_messages().await.expect("list"))
            .iter()
            .map(|m| m.id().into_inner())
            .collect();
        assert_eq!(remaining, vec![2, 3]);
    });
}

#[rstest]
#[ignore = "requires PostgreSQL via MESSAGE_BOARD_TEST_DATABASE_URL"]
fn deleting_unknown_message_is_not_found(#[from(schema_context)] context: SchemaContext) {
    context.rt.block_on(async {
        let mut store = open_store(&context).await;
        store.seed().await.expect("seed");

        let result = store.delete_message(MessageId::new(4)).await;

        assert!(matches!(result, Err(MessageStoreError::NotFound(_))));
        assert_eq!(store.get_all_messages().await.expect("list").len(), 3);
    });
}

#[rstest]
#[ignore = "requires PostgreSQL via MESSAGE_BOARD_TEST_DATABASE_URL"]
fn delete_all_then_reset(#[from(schema_context)] context: SchemaContext) {
    context.rt.block_on(async {
        let mut store = open_store(&context).await;
        store.seed().await.expect("seed");

        store.delete_all_messages().await.expect("delete all");
        assert!(store.get_all_messages().await.expect("list").is_empty());

        store.reset_to_seed().await.expect("reset");
        assert_eq!(
            sorted(store.get_all_messages().await.expect("list")),
            PgStore::get_seed_messages()
        );
    });
}
