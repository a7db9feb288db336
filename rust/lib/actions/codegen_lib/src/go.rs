//! Go profile and net/http handler template

use crate::field::{Field, ScalarType};
use crate::profile::LanguageProfile;

pub struct GoProfile;

impl LanguageProfile for GoProfile {
    fn language(&self) -> &str {
        "go"
    }

    fn file_extension(&self) -> &str {
        "go"
    }

    fn scalar_type(&self, scalar: ScalarType) -> &str {
        match scalar {
            ScalarType::Id | ScalarType::Int => "int",
            ScalarType::Float => "float32",
            ScalarType::String => "string",
            ScalarType::Boolean => "bool",
        }
    }

    fn type_header(&self, type_name: &str) -> String {
        format!("type {} struct", type_name)
    }

    fn field_line(&self, name: &str, ty: &str, list: bool, _nullable: bool) -> String {
        if list {
            format!("{} []{}", name, ty)
        } else {
            format!("{} {}", name, ty)
        }
    }
}

/// Standalone `net/http` server exposing one action at `/<action>`.
pub fn net_http_handler(
    action_name: &str,
    action_type: &str,
    _args: &[Field],
    type_defs: &str,
) -> String {
    let mut output = String::new();

    output.push_str("package main\n\n");
    output.push_str("import (\n");
    output.push_str("\t\"encoding/json\"\n");
    output.push_str("\t\"log\"\n");
    output.push_str("\t\"net/http\"\n");
    output.push_str(")\n\n");
    output.push_str(type_defs);
    output.push_str("\n\n");

    output.push_str("func handler(w http.ResponseWriter, r *http.Request) {\n");
    output.push_str("\t// Declare a new struct for unmarshalling the arguments\n");
    output.push_str(&format!("\tvar actionParams {}Args\n\n", action_name));
    output.push_str("\t// Try to decode the request body into the struct. If there is an error,\n");
    output.push_str("\t// respond to the client with the error message and a 400 status code.\n");
    output.push_str("\terr := json.NewDecoder(r.Body).Decode(&actionParams)\n");
    output.push_str("\tif err != nil {\n");
    output.push_str("\t\thttp.Error(w, err.Error(), http.StatusBadRequest)\n");
    output.push_str("\t\treturn\n");
    output.push_str("\t}\n\n");
    output.push_str("\t// Send the request params to the Action's generated handler function\n");
    output.push_str(&format!("\tresult := {}(actionParams)\n", action_name));
    output.push_str("\tdata, err := json.Marshal(result)\n");
    output.push_str("\tif err != nil {\n");
    output.push_str("\t\thttp.Error(w, err.Error(), http.StatusBadRequest)\n");
    output.push_str("\t\treturn\n");
    output.push_str("\t}\n\n");
    output.push_str("\t// Write the response as JSON\n");
    output.push_str("\tw.Header().Set(\"Content-Type\", \"application/json\")\n");
    output.push_str("\tw.WriteHeader(http.StatusOK)\n");
    output.push_str("\tw.Write(data)\n");
    output.push_str("}\n\n");

    output.push_str("// Takes the action parameters and must return its response type\n");
    output.push_str(&format!(
        "func {}(args {}Args) {} {{\n\n}}\n\n",
        action_name, action_name, action_type
    ));

    output.push_str("// HTTP server for the handler\n");
    output.push_str("func main() {\n");
    output.push_str("\tmux := http.NewServeMux()\n");
    output.push_str(&format!("\tmux.HandleFunc(\"/{}\", handler)\n\n", action_name));
    output.push_str("\terr := http.ListenAndServe(\":8080\", mux)\n");
    output.push_str("\tlog.Fatal(err)\n");
    output.push_str("}\n");

    output
}
