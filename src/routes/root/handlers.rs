pub async fn root() -> &'static str {
    "Welcome to the Picture Organizer API!"
}
