//! # Built-in Catalog
//!
//! The EnerPrice API reference content, compiled in. Pure data: section
//! order here is display order, narrative sections carry markdown, and
//! example text is stored verbatim per language key.

use crate::catalog::Catalog;
use crate::model::{Endpoint, Method, Parameter, Section};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::new(sections()));

/// The process-wide catalog, built on first use and immutable afterwards.
pub fn catalog() -> &'static Catalog {
    &BUILTIN
}

fn examples(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(lang, code)| (lang.to_string(), code.to_string()))
        .collect()
}

fn sections() -> Vec<Section> {
    vec![
        home(),
        auth(),
        energy_futures(),
        ancillary(),
        rec_rps(),
        utility_price(),
        errors(),
        notebook(),
        support(),
    ]
}

fn home() -> Section {
    Section {
        id: "home".to_string(),
        title: "EnerPrice API Documentation".to_string(),
        description: "Welcome to the comprehensive EnerPrice API documentation. Access energy \
                      market data, futures pricing, and utility information through our \
                      powerful REST API."
            .to_string(),
        endpoints: vec![],
        content: Some(
            r##"## Getting Started

Begin by obtaining your API key through authentication, then explore our
comprehensive energy data endpoints.

**Base URL**

`https://api.enerpricedata.com`

**Rate Limits**

1000 requests per hour
"##
            .to_string(),
        ),
    }
}

fn auth() -> Section {
    Section {
        id: "auth".to_string(),
        title: "Authentication & API Keys".to_string(),
        description: "Secure your API access with API key authentication. Each user can \
                      maintain one active API key for accessing energy data endpoints."
            .to_string(),
        endpoints: vec![Endpoint {
            method: Method::Post,
            url: "/auth/api-key".to_string(),
            title: "Generate API Key".to_string(),
            description: "Create a new API key for authentication. Requires JWT authentication."
                .to_string(),
            parameters: vec![Parameter::new(
                "name",
                "string",
                true,
                "Descriptive name for the API key",
            )],
            examples: examples(&[
                (
                    "python",
                    r##"import requests

# Generate API Key
url = "https://api.enerpricedata.com/auth/api-key"
headers = {
    "Authorization": "Bearer YOUR_JWT_TOKEN",
    "Content-Type": "application/json"
}
data = {
    "name": "My Energy Data Key"
}

response = requests.post(url, headers=headers, json=data)
api_key = response.json()["api_key"]
print(f"Your API Key: {api_key}")"##,
                ),
                (
                    "javascript",
                    r##"// Generate API Key
const response = await fetch('https://api.enerpricedata.com/auth/api-key', {
    method: 'POST',
    headers: {
        'Authorization': 'Bearer YOUR_JWT_TOKEN',
        'Content-Type': 'application/json'
    },
    body: JSON.stringify({
        name: 'My Energy Data Key'
    })
});

const data = await response.json();
console.log('Your API Key:', data.api_key);"##,
                ),
                (
                    "ruby",
                    r##"require 'net/http'
require 'json'

uri = URI('https://api.enerpricedata.com/auth/api-key')
http = Net::HTTP.new(uri.host, uri.port)
http.use_ssl = true

request = Net::HTTP::Post.new(uri)
request['Authorization'] = 'Bearer YOUR_JWT_TOKEN'
request['Content-Type'] = 'application/json'
request.body = { name: 'My Energy Data Key' }.to_json

response = http.request(request)
data = JSON.parse(response.body)
puts "Your API Key: #{data['api_key']}""##,
                ),
                (
                    "curl",
                    r##"curl -X POST "https://api.enerpricedata.com/auth/api-key" \
  -H "Authorization: Bearer YOUR_JWT_TOKEN" \
  -H "Content-Type: application/json" \
  -d '{
    "name": "My Energy Data Key"
  }'"##,
                ),
            ]),
        }],
        content: None,
    }
}

fn energy_futures() -> Section {
    Section {
        id: "energy-futures".to_string(),
        title: "Energy Futures Data".to_string(),
        description: "Access comprehensive energy futures pricing data across multiple control \
                      areas and block types. Download data in Excel, CSV, or JSON formats."
            .to_string(),
        endpoints: vec![
            Endpoint {
                method: Method::Get,
                url: "/datasets/download/energy-futures".to_string(),
                title: "Download Energy Futures (Excel)".to_string(),
                description: "Download energy futures data in Excel format. Supports single \
                              date or date range downloads."
                    .to_string(),
                parameters: vec![
                    Parameter::new(
                        "start_operating_date",
                        "date",
                        true,
                        "Start date for download (YYYY-MM-DD)",
                    ),
                    Parameter::new(
                        "end_operating_date",
                        "date",
                        false,
                        "End date for bulk download (YYYY-MM-DD)",
                    ),
                    Parameter::new(
                        "control_area",
                        "string",
                        false,
                        "Control area (ERCOT, ISONE, PJM, NYISO, MISO)",
                    ),
                    Parameter::new(
                        "block_types",
                        "string",
                        false,
                        "Block types, comma-separated (7x8,2x16,5x16)",
                    ),
                    Parameter::new("start_date", "date", false, "Start date filter (YYYY-MM-DD)"),
                    Parameter::new("end_date", "date", false, "End date filter (YYYY-MM-DD)"),
                ],
                examples: examples(&[
                    (
                        "python",
                        r##"import requests

# Download Energy Futures Data
url = "https://api.enerpricedata.com/datasets/download/energy-futures"
headers = {
    "X-API-Key": "YOUR_API_KEY"
}
params = {
    "start_operating_date": "2024-01-15",
    "control_area": "ERCOT",
    "block_types": "7x8,2x16"
}

response = requests.get(url, headers=headers, params=params)

# Save Excel file
with open("energy_futures.xlsx", "wb") as f:
    f.write(response.content)

print("Energy futures data downloaded successfully!")"##,
                    ),
                    (
                        "javascript",
                        r##"// Download Energy Futures Data
const params = new URLSearchParams({
    start_operating_date: '2024-01-15',
    control_area: 'ERCOT',
    block_types: '7x8,2x16'
});

const response = await fetch(`https://api.enerpricedata.com/datasets/download/energy-futures?${params}`, {
    headers: {
        'X-API-Key': 'YOUR_API_KEY'
    }
});

const blob = await response.blob();
const url = window.URL.createObjectURL(blob);
const a = document.createElement('a');
a.href = url;
a.download = 'energy_futures.xlsx';
a.click();"##,
                    ),
                    (
                        "ruby",
                        r##"require 'net/http'

uri = URI('https://api.enerpricedata.com/datasets/download/energy-futures')
params = {
  start_operating_date: '2024-01-15',
  control_area: 'ERCOT',
  block_types: '7x8,2x16'
}
uri.query = URI.encode_www_form(params)

http = Net::HTTP.new(uri.host, uri.port)
http.use_ssl = true

request = Net::HTTP::Get.new(uri)
request['X-API-Key'] = 'YOUR_API_KEY'

response = http.request(request)
File.write('energy_futures.xlsx', response.body)
puts 'Energy futures data downloaded!'"##,
                    ),
                    (
                        "curl",
                        r##"curl -X GET "https://api.enerpricedata.com/datasets/download/energy-futures?start_operating_date=2024-01-15&control_area=ERCOT&block_types=7x8,2x16" \
  -H "X-API-Key: YOUR_API_KEY" \
  -o energy_futures.xlsx"##,
                    ),
                ]),
            },
            Endpoint {
                method: Method::Get,
                url: "/datasets/download/energy-futures/json".to_string(),
                title: "Download Energy Futures (JSON)".to_string(),
                description: "Download energy futures data as JSON with pagination support."
                    .to_string(),
                parameters: vec![
                    Parameter::new(
                        "start_operating_date",
                        "date",
                        true,
                        "Date for data download (YYYY-MM-DD)",
                    ),
                    Parameter::new("control_area", "string", false, "Control area filter"),
                    Parameter::new("block_types", "string", false, "Block types filter"),
                    Parameter::new(
                        "raw",
                        "boolean",
                        false,
                        "Return JSON directly instead of file download",
                    ),
                ],
                examples: examples(&[
                    (
                        "python",
                        r##"import requests

# Get Energy Futures JSON Data
url = "https://api.enerpricedata.com/datasets/download/energy-futures/json"
headers = {
    "X-API-Key": "YOUR_API_KEY"
}
params = {
    "start_operating_date": "2024-01-15",
    "control_area": "ERCOT",
    "raw": True
}

response = requests.get(url, headers=headers, params=params)
data = response.json()

print("Retrieved energy futures records")
print("Sample data structure available")"##,
                    ),
                    (
                        "javascript",
                        r##"// Get Energy Futures JSON Data
const params = new URLSearchParams({
    start_operating_date: '2024-01-15',
    control_area: 'ERCOT',
    raw: 'true'
});

const response = await fetch(`https://api.enerpricedata.com/datasets/download/energy-futures/json?${params}`, {
    headers: {
        'X-API-Key': 'YOUR_API_KEY'
    }
});

const data = await response.json();
console.log('Retrieved energy futures records');
console.log('Sample data structure available');"##,
                    ),
                    (
                        "ruby",
                        r##"require 'net/http'
require 'json'

uri = URI('https://api.enerpricedata.com/datasets/download/energy-futures/json')
params = {
  start_operating_date: '2024-01-15',
  control_area: 'ERCOT',
  raw: 'true'
}
uri.query = URI.encode_www_form(params)

http = Net::HTTP.new(uri.host, uri.port)
http.use_ssl = true

request = Net::HTTP::Get.new(uri)
request['X-API-Key'] = 'YOUR_API_KEY'

response = http.request(request)
data = JSON.parse(response.body)

puts "Retrieved energy futures records"
puts "Sample data structure available""##,
                    ),
                    (
                        "curl",
                        r##"curl -X GET "https://api.enerpricedata.com/datasets/download/energy-futures/json?start_operating_date=2024-01-15&control_area=ERCOT&raw=true" \
  -H "X-API-Key: YOUR_API_KEY""##,
                    ),
                ]),
            },
        ],
        content: None,
    }
}

fn ancillary() -> Section {
    Section {
        id: "ancillary".to_string(),
        title: "Ancillary Uplift Data".to_string(),
        description: "Access ancillary services uplift data across different control areas. \
                      Download in Excel, CSV, or JSON formats with comprehensive filtering \
                      options."
            .to_string(),
        endpoints: vec![Endpoint {
            method: Method::Get,
            url: "/datasets/download/ancillary-uplift".to_string(),
            title: "Download Ancillary Uplift (Excel)".to_string(),
            description: "Download ancillary uplift data in Excel format.".to_string(),
            parameters: vec![
                Parameter::new(
                    "start_operating_date",
                    "date",
                    true,
                    "Start date for download (YYYY-MM-DD)",
                ),
                Parameter::new(
                    "end_operating_date",
                    "date",
                    false,
                    "End date for bulk download",
                ),
                Parameter::new(
                    "control_area",
                    "string",
                    false,
                    "Control area (ERCOT, ISONE, PJM)",
                ),
            ],
            examples: examples(&[
                (
                    "python",
                    r##"import requests

# Download Ancillary Uplift Data
url = "https://api.enerpricedata.com/datasets/download/ancillary-uplift"
headers = {
    "X-API-Key": "YOUR_API_KEY"
}
params = {
    "start_operating_date": "2024-01-15",
    "control_area": "ERCOT"
}

response = requests.get(url, headers=headers, params=params)
with open("ancillary_uplift.xlsx", "wb") as f:
    f.write(response.content)"##,
                ),
                (
                    "javascript",
                    r##"const params = new URLSearchParams({
    start_operating_date: '2024-01-15',
    control_area: 'ERCOT'
});

const response = await fetch(`https://api.enerpricedata.com/datasets/download/ancillary-uplift?${params}`, {
    headers: { 'X-API-Key': 'YOUR_API_KEY' }
});

const blob = await response.blob();
// Handle file download..."##,
                ),
                (
                    "ruby",
                    r##"require 'net/http'

uri = URI('https://api.enerpricedata.com/datasets/download/ancillary-uplift')
params = { start_operating_date: '2024-01-15', control_area: 'ERCOT' }
uri.query = URI.encode_www_form(params)

request = Net::HTTP::Get.new(uri)
request['X-API-Key'] = 'YOUR_API_KEY'"##,
                ),
                (
                    "curl",
                    r##"curl -X GET "https://api.enerpricedata.com/datasets/download/ancillary-uplift?start_operating_date=2024-01-15&control_area=ERCOT" \
  -H "X-API-Key: YOUR_API_KEY" \
  -o ancillary_uplift.xlsx"##,
                ),
            ]),
        }],
        content: None,
    }
}

fn rec_rps() -> Section {
    Section {
        id: "rec-rps".to_string(),
        title: "REC/RPS Data".to_string(),
        description: "Access Renewable Energy Certificate (REC) and Renewable Portfolio \
                      Standard (RPS) data across control areas."
            .to_string(),
        endpoints: vec![Endpoint {
            method: Method::Get,
            url: "/datasets/download/rec-rps".to_string(),
            title: "Download REC/RPS Data (Excel)".to_string(),
            description: "Download REC/RPS data in Excel format.".to_string(),
            parameters: vec![
                Parameter::new("start_operating_date", "date", true, "Start date for download"),
                Parameter::new("control_area", "string", false, "Control area filter"),
            ],
            examples: examples(&[
                (
                    "python",
                    r##"import requests

url = "https://api.enerpricedata.com/datasets/download/rec-rps"
headers = {"X-API-Key": "YOUR_API_KEY"}
params = {"start_operating_date": "2024-01-15"}

response = requests.get(url, headers=headers, params=params)"##,
                ),
                (
                    "javascript",
                    r##"const response = await fetch('https://api.enerpricedata.com/datasets/download/rec-rps?start_operating_date=2024-01-15', {
    headers: { 'X-API-Key': 'YOUR_API_KEY' }
});"##,
                ),
                (
                    "ruby",
                    r##"uri = URI('https://api.enerpricedata.com/datasets/download/rec-rps')
request = Net::HTTP::Get.new(uri)
request['X-API-Key'] = 'YOUR_API_KEY'"##,
                ),
                (
                    "curl",
                    r##"curl -X GET "https://api.enerpricedata.com/datasets/download/rec-rps?start_operating_date=2024-01-15" \
  -H "X-API-Key: YOUR_API_KEY""##,
                ),
            ]),
        }],
        content: None,
    }
}

fn utility_price() -> Section {
    Section {
        id: "utility-price".to_string(),
        title: "Utility Price Data".to_string(),
        description: "Access comprehensive utility pricing data including summary and detailed \
                      information."
            .to_string(),
        endpoints: vec![Endpoint {
            method: Method::Get,
            url: "/datasets/download/utility-price".to_string(),
            title: "Download Utility Price (Excel)".to_string(),
            description: "Download utility price data in Excel format.".to_string(),
            parameters: vec![Parameter::new(
                "start_operating_date",
                "date",
                true,
                "Operating date for download",
            )],
            examples: examples(&[
                (
                    "python",
                    r##"import requests

url = "https://api.enerpricedata.com/datasets/download/utility-price"
headers = {"X-API-Key": "YOUR_API_KEY"}
params = {"start_operating_date": "2024-01-15"}

response = requests.get(url, headers=headers, params=params)"##,
                ),
                (
                    "javascript",
                    r##"const response = await fetch('https://api.enerpricedata.com/datasets/download/utility-price?start_operating_date=2024-01-15', {
    headers: { 'X-API-Key': 'YOUR_API_KEY' }
});"##,
                ),
                (
                    "ruby",
                    r##"uri = URI('https://api.enerpricedata.com/datasets/download/utility-price')
request = Net::HTTP::Get.new(uri)
request['X-API-Key'] = 'YOUR_API_KEY'"##,
                ),
                (
                    "curl",
                    r##"curl -X GET "https://api.enerpricedata.com/datasets/download/utility-price?start_operating_date=2024-01-15" \
  -H "X-API-Key: YOUR_API_KEY""##,
                ),
            ]),
        }],
        content: None,
    }
}

fn errors() -> Section {
    Section {
        id: "errors".to_string(),
        title: "Error Codes".to_string(),
        description: "Complete reference of API error codes and their meanings.".to_string(),
        endpoints: vec![],
        content: Some(
            r##"| Error Code | Meaning |
| --- | --- |
| 400 | Bad Request — Your request is invalid or missing required parameters. |
| 401 | Unauthorized — Your API credentials are incorrect or missing. |
| 403 | Forbidden — You do not have permission to access this resource. |
| 404 | Not Found — The requested data or endpoint could not be found. |
| 429 | Too Many Requests — You've hit the rate limit. Please wait and try again. |
| 500 | Internal Server Error — Something went wrong on our end. |
"##
            .to_string(),
        ),
    }
}

fn notebook() -> Section {
    Section {
        id: "notebook".to_string(),
        title: "Example Notebook".to_string(),
        description: "Interactive Jupyter notebook with comprehensive API usage examples."
            .to_string(),
        endpoints: vec![],
        content: Some(
            r##"## Interactive Examples

Explore our comprehensive Jupyter notebook with real-world examples and best
practices.

[Open in Google Colab](https://colab.research.google.com/notebook)
"##
            .to_string(),
        ),
    }
}

fn support() -> Section {
    Section {
        id: "support".to_string(),
        title: "Support & Contact".to_string(),
        description: "Get help with API integration, troubleshooting, and technical questions."
            .to_string(),
        endpoints: vec![],
        content: Some(
            r##"## Technical Support

Get help with API integration and technical issues.

[support@enerpricedata.com](mailto:support@enerpricedata.com)

## Sales & Partnerships

Discuss enterprise solutions and partnerships.

[sales@enerpricedata.com](mailto:sales@enerpricedata.com)

## Documentation Feedback

Found an issue with our documentation? Help us improve by reporting it.
"##
            .to_string(),
        ),
    }
}
