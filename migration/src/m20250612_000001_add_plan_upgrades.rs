use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum PlanUpgrades {
    Table,
    Id,
    UserId,
    StripeSetupIntentId,
    TargetPlan,
    Status,
    StripeStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanUpgrades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlanUpgrades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlanUpgrades::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(PlanUpgrades::StripeSetupIntentId)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PlanUpgrades::TargetPlan).string_len(20).not_null())
                    .col(
                        ColumnDef::new(PlanUpgrades::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(PlanUpgrades::StripeStatus).string_len(50).null())
                    .col(
                        ColumnDef::new(PlanUpgrades::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlanUpgrades::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_plan_upgrades_user_id")
                    .table(PlanUpgrades::Table)
                    .col(PlanUpgrades::UserId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
