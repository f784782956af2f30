use vitrine_kernel::{Model, Value};

#[derive(Debug, Clone, Model)]
pub struct Account {
    pub id: u64,
    #[model(rename = "mail")]
    pub email: String,
    pub nickname: Option<String>,
    pub tags: Vec<String>,
    #[model(skip)]
    pub password_hash: String,
    pub r#type: String,
}

fn main() {
    let account = Account {
        id: 7,
        email: "jane@example.com".to_owned(),
        nickname: None,
        tags: vec!["admin".to_owned()],
        password_hash: "secret".to_owned(),
        r#type: "person".to_owned(),
    };

    let record = account.to_array();
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();

    assert_eq!(keys, ["id", "mail", "nickname", "tags", "type"]);
    assert_eq!(record["id"], 7);
    assert_eq!(record["nickname"], Value::Null);
    assert!(!record.contains_key("password_hash"));
}
