use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    Plan,
    IsAdimplente,
    SubscriptionEndsAt,
    TrialAtivo,
    TrialExpiraEm,
    StripeCustomerId,
    IsAdmin,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserUsage {
    Table,
    Id,
    UserId,
    Month,
    AiConsultations,
    TracksCompleted,
    VideoSeconds,
    EventsCreated,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Farms {
    Table,
    Id,
    UserId,
    Name,
    City,
    State,
    Latitude,
    Longitude,
    Crop,
    AreaHectares,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CalendarEvents {
    Table,
    Id,
    UserId,
    Title,
    Description,
    EventType,
    EventDate,
    Completed,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    PriceCents,
    Category,
    ImageUrl,
    InStock,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CartItems {
    Table,
    Id,
    UserId,
    ProductId,
    Quantity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tracks {
    Table,
    Id,
    Title,
    Description,
    TrackIndex,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Videos {
    Table,
    Id,
    TrackId,
    Title,
    VideoUrl,
    DurationSeconds,
    Position,
    CreatedAt,
}

#[derive(DeriveIden)]
enum VideoProgress {
    Table,
    Id,
    UserId,
    VideoId,
    WatchedSeconds,
    Completed,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ChatMessages {
    Table,
    Id,
    UserId,
    Role,
    Content,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    UserId,
    Title,
    Message,
    NotificationType,
    Read,
    CreatedAt,
}

fn timestamps(table: &mut TableCreateStatement, created: impl IntoIden, updated: impl IntoIden) {
    table
        .col(
            ColumnDef::new(created.into_iden())
                .timestamp_with_time_zone()
                .default(Expr::cust("NOW()"))
                .not_null(),
        )
        .col(
            ColumnDef::new(updated.into_iden())
                .timestamp_with_time_zone()
                .default(Expr::cust("NOW()"))
                .not_null(),
        );
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut users = Table::create();
        users
            .table(Users::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Users::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Users::Name).string_len(100).not_null())
            .col(ColumnDef::new(Users::Email).string_len(255).not_null().unique_key())
            .col(ColumnDef::new(Users::PasswordHash).string_len(255).not_null())
            .col(ColumnDef::new(Users::Phone).string_len(30).null())
            .col(
                ColumnDef::new(Users::Plan)
                    .string_len(20)
                    .not_null()
                    .default("gratuito"),
            )
            .col(ColumnDef::new(Users::IsAdimplente).boolean().not_null().default(true))
            .col(ColumnDef::new(Users::SubscriptionEndsAt).timestamp_with_time_zone().null())
            .col(ColumnDef::new(Users::TrialAtivo).boolean().not_null().default(false))
            .col(ColumnDef::new(Users::TrialExpiraEm).timestamp_with_time_zone().null())
            .col(ColumnDef::new(Users::StripeCustomerId).string_len(255).null())
            .col(ColumnDef::new(Users::IsAdmin).boolean().not_null().default(false))
            .col(ColumnDef::new(Users::IsActive).boolean().not_null().default(true));
        timestamps(&mut users, Users::CreatedAt, Users::UpdatedAt);
        manager.create_table(users.to_owned()).await?;

        let mut usage = Table::create();
        usage
            .table(UserUsage::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(UserUsage::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(UserUsage::UserId).big_integer().not_null())
            .col(ColumnDef::new(UserUsage::Month).string_len(7).not_null())
            .col(ColumnDef::new(UserUsage::AiConsultations).big_integer().not_null().default(0))
            .col(ColumnDef::new(UserUsage::TracksCompleted).big_integer().not_null().default(0))
            .col(ColumnDef::new(UserUsage::VideoSeconds).big_integer().not_null().default(0))
            .col(ColumnDef::new(UserUsage::EventsCreated).big_integer().not_null().default(0));
        timestamps(&mut usage, UserUsage::CreatedAt, UserUsage::UpdatedAt);
        manager.create_table(usage.to_owned()).await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_usage_user_month")
                    .table(UserUsage::Table)
                    .col(UserUsage::UserId)
                    .col(UserUsage::Month)
                    .unique()
                    .to_owned(),
            )
            .await?;

        let mut farms = Table::create();
        farms
            .table(Farms::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Farms::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Farms::UserId).big_integer().not_null())
            .col(ColumnDef::new(Farms::Name).string_len(100).not_null())
            .col(ColumnDef::new(Farms::City).string_len(100).not_null())
            .col(ColumnDef::new(Farms::State).string_len(2).not_null())
            .col(ColumnDef::new(Farms::Latitude).double().not_null())
            .col(ColumnDef::new(Farms::Longitude).double().not_null())
            .col(ColumnDef::new(Farms::Crop).string_len(100).not_null())
            .col(ColumnDef::new(Farms::AreaHectares).double().null())
            .col(ColumnDef::new(Farms::IsActive).boolean().not_null().default(false));
        timestamps(&mut farms, Farms::CreatedAt, Farms::UpdatedAt);
        manager.create_table(farms.to_owned()).await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_farms_user_id")
                    .table(Farms::Table)
                    .col(Farms::UserId)
                    .to_owned(),
            )
            .await?;

        let mut events = Table::create();
        events
            .table(CalendarEvents::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(CalendarEvents::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(CalendarEvents::UserId).big_integer().not_null())
            .col(ColumnDef::new(CalendarEvents::Title).string_len(150).not_null())
            .col(ColumnDef::new(CalendarEvents::Description).text().null())
            .col(ColumnDef::new(CalendarEvents::EventType).string_len(30).not_null())
            .col(ColumnDef::new(CalendarEvents::EventDate).date().not_null())
            .col(ColumnDef::new(CalendarEvents::Completed).boolean().not_null().default(false));
        timestamps(&mut events, CalendarEvents::CreatedAt, CalendarEvents::UpdatedAt);
        manager.create_table(events.to_owned()).await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_calendar_events_user_date")
                    .table(CalendarEvents::Table)
                    .col(CalendarEvents::UserId)
                    .col(CalendarEvents::EventDate)
                    .to_owned(),
            )
            .await?;

        let mut products = Table::create();
        products
            .table(Products::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Products::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Products::Name).string_len(150).not_null())
            .col(ColumnDef::new(Products::Description).text().not_null())
            .col(ColumnDef::new(Products::PriceCents).big_integer().not_null())
            .col(ColumnDef::new(Products::Category).string_len(50).not_null())
            .col(ColumnDef::new(Products::ImageUrl).string_len(500).null())
            .col(ColumnDef::new(Products::InStock).boolean().not_null().default(true))
            .col(ColumnDef::new(Products::IsActive).boolean().not_null().default(true));
        timestamps(&mut products, Products::CreatedAt, Products::UpdatedAt);
        manager.create_table(products.to_owned()).await?;

        let mut cart = Table::create();
        cart.table(CartItems::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(CartItems::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(CartItems::UserId).big_integer().not_null())
            .col(ColumnDef::new(CartItems::ProductId).big_integer().not_null())
            .col(ColumnDef::new(CartItems::Quantity).integer().not_null().default(1));
        timestamps(&mut cart, CartItems::CreatedAt, CartItems::UpdatedAt);
        manager.create_table(cart.to_owned()).await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cart_items_user_product")
                    .table(CartItems::Table)
                    .col(CartItems::UserId)
                    .col(CartItems::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tracks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tracks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tracks::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Tracks::Description).text().not_null())
                    .col(ColumnDef::new(Tracks::TrackIndex).integer().not_null().unique_key())
                    .col(
                        ColumnDef::new(Tracks::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Videos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Videos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Videos::TrackId).big_integer().not_null())
                    .col(ColumnDef::new(Videos::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Videos::VideoUrl).string_len(500).not_null())
                    .col(ColumnDef::new(Videos::DurationSeconds).integer().not_null())
                    .col(ColumnDef::new(Videos::Position).integer().not_null())
                    .col(
                        ColumnDef::new(Videos::CreatedAt)
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
                    .name("idx_videos_track_id")
                    .table(Videos::Table)
                    .col(Videos::TrackId)
                    .to_owned(),
            )
            .await?;

        let mut progress = Table::create();
        progress
            .table(VideoProgress::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(VideoProgress::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(VideoProgress::UserId).big_integer().not_null())
            .col(ColumnDef::new(VideoProgress::VideoId).big_integer().not_null())
            .col(ColumnDef::new(VideoProgress::WatchedSeconds).integer().not_null().default(0))
            .col(ColumnDef::new(VideoProgress::Completed).boolean().not_null().default(false));
        timestamps(&mut progress, VideoProgress::CreatedAt, VideoProgress::UpdatedAt);
        manager.create_table(progress.to_owned()).await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_video_progress_user_video")
                    .table(VideoProgress::Table)
                    .col(VideoProgress::UserId)
                    .col(VideoProgress::VideoId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ChatMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChatMessages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ChatMessages::UserId).big_integer().not_null())
                    .col(ColumnDef::new(ChatMessages::Role).string_len(20).not_null())
                    .col(ColumnDef::new(ChatMessages::Content).text().not_null())
                    .col(
                        ColumnDef::new(ChatMessages::CreatedAt)
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
                    .name("idx_chat_messages_user_id")
                    .table(ChatMessages::Table)
                    .col(ChatMessages::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Notifications::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(ColumnDef::new(Notifications::NotificationType).string_len(30).not_null())
                    .col(ColumnDef::new(Notifications::Read).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
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
                    .name("idx_notifications_user_read")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .col(Notifications::Read)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
