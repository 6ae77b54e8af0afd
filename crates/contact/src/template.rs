#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactHtmlTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub year: i32,
}

#[derive(askama::Template)]
#[template(path = "contact.txt")]
pub struct ContactPlainTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub year: i32,
}
