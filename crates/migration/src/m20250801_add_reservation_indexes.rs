use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index for the per-room overlap check and the ordered listing
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_room_id_start_time")
                    .table(Reservations::Table)
                    .col(Reservations::RoomId)
                    .col(Reservations::StartTime)
                    .to_owned(),
            )
            .await?;

        // Index for the future-only listing filter
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_end_time")
                    .table(Reservations::Table)
                    .col(Reservations::EndTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(Index::drop().name("idx_reservations_end_time").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_reservations_room_id_start_time")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Reservations {
    Table,
    RoomId,
    StartTime,
    EndTime,
}
