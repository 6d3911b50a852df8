pub async fn ping() -> String {
    "[ok]".to_owned()
}
