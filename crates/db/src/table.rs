use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Age,
    Gender,
    Dob,
    Bio,
    SocialLinks,
    City,
    Interests,
    Lat,
    Lon,
    ProfileImage,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    LocationName,
    EventTime,
    Lat,
    Lon,
    Category,
    Popularity,
    CreatedBy,
}

#[derive(Iden, Clone)]
pub enum Interested {
    Table,
    Id,
    EventId,
    UserId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum UserPreference {
    Table,
    UserId,
    Category,
    Choice,
}

#[derive(Iden, Clone)]
pub enum UserQuizAnswer {
    Table,
    Id,
    UserId,
    Question,
    Answer,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum UserEventLog {
    Table,
    Id,
    UserId,
    EventId,
    Action,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Icebreaker {
    Table,
    Id,
    Question,
    Category,
}
