pub fn get_form_api_url() -> &'static str {
    "https://test.ezworks.ai/form-api"
}
