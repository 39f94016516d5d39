mod local_result_store_test;
mod vertex_gemini_client_test;
