//! Built-in article set: sixteen Portuguese-language news items, four of them
//! featured. Image references are stored raw; delivery variants are derived
//! per query and never written back.

use chrono::{DateTime, Utc};

use crate::domain::article::{Article, ArticleId, ArticleTitle, Category, ReadTime};

#[allow(clippy::too_many_arguments)]
fn article(
    id: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    category: Category,
    author: &str,
    published_at: &str,
    image_url: &str,
    read_time: u32,
    featured: bool,
) -> Article {
    Article {
        id: ArticleId::new(id).expect("seed article id is valid"),
        title: ArticleTitle::new(title).expect("seed article title is valid"),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        category,
        published_at: DateTime::parse_from_rfc3339(published_at)
            .expect("seed article timestamp is valid ISO-8601")
            .with_timezone(&Utc),
        image_url: image_url.to_string(),
        read_time: ReadTime::new(read_time).expect("seed article read time is positive"),
        featured,
    }
}

pub fn default_catalog() -> Vec<Article> {
    vec![
        article(
            "1",
            "Cúpula Global Alcança Acordo Histórico sobre Metas Climáticas para 2030",
            "Em uma decisão histórica, 195 nações se comprometeram com novas metas agressivas de \
             redução de carbono, sinalizando uma abordagem unificada para a crise climática.",
            "<p>Em uma reviravolta histórica, líderes mundiais reunidos em Genebra concordaram \
             unanimemente com o plano de ação climática mais agressivo desde o Acordo de Paris. O \
             \"Pacto da Terra 2030\" visa reduzir as emissões globais de carbono em 60% nos \
             próximos seis anos.</p>\
             <p>\"Este não é apenas um documento; é uma tábua de salvação para o nosso planeta\", \
             declarou o Secretário-Geral da ONU durante a cerimônia de encerramento. O acordo foca \
             fortemente na transição das redes de energia para fontes 100% renováveis e na \
             implementação de impostos rigorosos sobre carbono para indústrias pesadas.</p>\
             <h3>Implicações Econômicas</h3>\
             <p>Economistas preveem uma volatilidade de curto prazo nos mercados de energia, \
             seguida por um boom massivo nos setores de tecnologia verde. Ações de energia solar, \
             eólica e armazenamento de bateria subiram imediatamente após o anúncio.</p>\
             <p>No entanto, críticos argumentam que as nações em desenvolvimento podem ter \
             dificuldades com a transição rápida sem ajuda financeira significativa. O pacto \
             inclui um fundo de $500 bilhões para ajudar essas economias, financiado \
             principalmente pelas nações do G7.</p>\
             <h3>O Caminho à Frente</h3>\
             <p>A implementação começa imediatamente, com revisões trimestrais agendadas para \
             garantir a conformidade. Ativistas fora da cúpula celebraram a notícia, mas \
             prometeram permanecer vigilantes.</p>",
            Category::World,
            "Elena Fisher",
            "2024-05-20T08:30:00Z",
            "https://images.unsplash.com/photo-1466611653911-95081537e5b7",
            5,
            true,
        ),
        article(
            "2",
            "Gigantes da Tecnologia Revelam Processador Quântico Revolucionário",
            "O novo chip Q-Core promete resolver problemas complexos em segundos, problemas que \
             levariam milênios para supercomputadores.",
            "<p>O Vale do Silício está agitado com a revelação do 'Q-Core', um processador \
             quântico que supostamente alcança a supremacia quântica. Desenvolvido por uma \
             coalizão das principais empresas de tecnologia, o chip utiliza 128 qubits com \
             estabilidade sem precedentes.</p>\
             <p>As aplicações variam desde a descoberta de medicamentos até criptografia \
             avançada. \"Estamos entrando em uma nova era da computação\", disse o Dr. Aris \
             Thorne, engenheiro líder do projeto.</p>",
            Category::Technology,
            "Marcus Chen",
            "2024-05-19T14:15:00Z",
            "https://images.unsplash.com/photo-1550751827-4bd374c3f58b",
            4,
            true,
        ),
        article(
            "3",
            "Mercados Sobem com Dados de Inflação Mostrando Queda Inesperada",
            "Os principais índices atingiram recordes hoje, pois o último relatório do IPC indica \
             que as pressões inflacionárias estão finalmente diminuindo.",
            "<p>Wall Street celebrou hoje, pois o Índice de Preços ao Consumidor (IPC) subiu \
             apenas 0,1% no mês passado, bem abaixo das expectativas.</p>",
            Category::Business,
            "Sarah Jenkins",
            "2024-05-20T10:00:00Z",
            "https://images.unsplash.com/photo-1611974765270-ca1258634369",
            3,
            false,
        ),
        article(
            "4",
            "O Futuro do Transporte Urbano: Táxis Voadores Liberados",
            "Órgãos reguladores concederam as primeiras licenças comerciais para aeronaves EVTOL \
             em três grandes cidades.",
            "<p>O sonho dos carros voadores está um passo mais perto da realidade. A Administração \
             Federal de Aviação concedeu licenças comerciais limitadas a duas grandes startups de \
             EVTOL (Decolagem e Aterrissagem Vertical Elétrica).</p>",
            Category::Technology,
            "David Ross",
            "2024-05-18T09:45:00Z",
            "https://images.unsplash.com/photo-1524143986875-3b098d78b363",
            6,
            false,
        ),
        article(
            "5",
            "Finais do Campeonato: Zebras Levam o Troféu em Virada Espetacular",
            "Em uma partida que será lembrada por décadas, o City Rovers derrotou os Titans por \
             3-2.",
            "<p>A história do esporte foi feita na noite passada. O City Rovers, entrando no \
             torneio como zebras, levantou o troféu.</p>",
            Category::Sports,
            "Tom Brady",
            "2024-05-19T22:00:00Z",
            "https://images.unsplash.com/photo-1504454172868-6087c3176b1b",
            4,
            false,
        ),
        article(
            "6",
            "Novo Rover em Marte Envia Panorama de Tirar o Fôlego",
            "O mais recente explorador da NASA capturou as imagens mais detalhadas da superfície \
             do Planeta Vermelho até hoje.",
            "<p>As imagens revelam antigos leitos de rios e possíveis sinais de vida microbiana \
             de bilhões de anos atrás.</p>",
            Category::Science,
            "Dra. Emily Stone",
            "2024-05-17T11:20:00Z",
            "https://images.unsplash.com/photo-1614728853975-69c960c72741",
            5,
            false,
        ),
        article(
            "7",
            "Minimalismo no Web Design: A Tendência Acabou?",
            "Designers estão se movendo em direção ao maximalismo e brutalismo em reação à \
             estética limpa da década de 2010.",
            "<p>As tendências de web design são cíclicas. Estamos vendo um ressurgimento de cores \
             ousadas, layouts complexos e tipografia pesada.</p>",
            Category::Technology,
            "Jessica Lee",
            "2024-05-15T16:30:00Z",
            "https://images.unsplash.com/photo-1550684848-fac1c5b4e853",
            7,
            false,
        ),
        article(
            "8",
            "Eleições no Parlamento Europeu: O Que Esperar",
            "Com a votação se aproximando, pesquisas indicam uma mudança significativa no cenário \
             político do continente.",
            "<p>Analistas políticos preveem um comparecimento recorde nas próximas eleições. As \
             questões centrais incluem imigração, economia e segurança energética.</p>",
            Category::Politics,
            "Jean-Pierre Dubois",
            "2024-05-21T07:00:00Z",
            "https://images.unsplash.com/photo-1529108190281-9a4f620bc2d8",
            6,
            true,
        ),
        article(
            "9",
            "Avanço na Cura do Alzheimer: Novos Testes Clínicos Promissores",
            "Um novo medicamento experimental mostrou capacidade de reverter a perda de memória \
             em estágios iniciais.",
            "<p>Pesquisadores da Universidade de Oxford publicaram resultados animadores sobre a \
             droga 'NeuroClear'. Os pacientes demonstraram uma melhoria de 40% nas funções \
             cognitivas.</p>",
            Category::Health,
            "Dr. Roberto Silva",
            "2024-05-21T09:00:00Z",
            "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d",
            8,
            true,
        ),
        article(
            "10",
            "Festival de Cinema de Cannes: Os Vencedores Deste Ano",
            "O cinema independente roubou a cena, com produções de baixo orçamento levando os \
             principais prêmios.",
            "<p>A Palma de Ouro foi para um drama experimental coreano, surpreendendo os \
             críticos. O tapete vermelho brilhou com as maiores estrelas do mundo.</p>",
            Category::Entertainment,
            "Sophia Loren",
            "2024-05-20T18:00:00Z",
            "https://images.unsplash.com/photo-1489599849927-2ee91cede3ba",
            4,
            false,
        ),
        article(
            "11",
            "Startup Brasileira de Agronegócio Recebe Investimento Bilionário",
            "A 'AgroTech Verde' se tornou o mais novo unicórnio do país após rodada de \
             investimento liderada por fundos asiáticos.",
            "<p>A tecnologia da empresa utiliza drones e IA para monitorar a saúde das plantações \
             em tempo real, reduzindo o uso de pesticidas em 70%.</p>",
            Category::Business,
            "Ana Paula Padrão",
            "2024-05-21T11:00:00Z",
            "https://images.unsplash.com/photo-1586771107445-d3ca888129ff",
            5,
            false,
        ),
        article(
            "12",
            "Descoberta Arqueológica no Egito Revela Tumba Desconhecida",
            "Arqueólogos encontraram uma tumba intacta de 4.000 anos que pode pertencer a um \
             faraó esquecido.",
            "<p>Os artefatos encontrados dentro da tumba estão em condições impecáveis. \
             Hieróglifos nas paredes contam a história de um reinado próspero, mas breve.</p>",
            Category::Science,
            "Zahi Hawass",
            "2024-05-18T14:30:00Z",
            "https://images.unsplash.com/photo-1539650116455-251d9a6952dd",
            6,
            false,
        ),
        article(
            "13",
            "Copa do Mundo Feminina: Sedes Anunciadas para 2027",
            "O Brasil foi escolhido como país sede, prometendo a 'Copa das Copas' para o futebol \
             feminino.",
            "<p>A decisão da FIFA foi celebrada em todo o país. O Maracanã será o palco da grande \
             final, com expectativa de recorde de público.</p>",
            Category::Sports,
            "Marta Silva",
            "2024-05-19T10:00:00Z",
            "https://images.unsplash.com/photo-1431324155629-1a6deb1dec8d",
            3,
            false,
        ),
        article(
            "14",
            "O Retorno do Vinil: Vendas Superam CDs Pela Primeira Vez em 30 Anos",
            "A nostalgia e a busca por qualidade de som impulsionam o mercado físico de música.",
            "<p>Lojas de discos estão reabrindo em todo o mundo. Artistas como Taylor Swift e \
             Harry Styles lideram as vendas com edições especiais de colecionador.</p>",
            Category::Entertainment,
            "Jack White",
            "2024-05-17T15:45:00Z",
            "https://images.unsplash.com/photo-1461360370896-922624d12aa1",
            4,
            false,
        ),
        article(
            "15",
            "Meditação e Saúde Mental: Estudos Comprovam Benefícios a Longo Prazo",
            "Praticar mindfulness por apenas 10 minutos diários pode reduzir drasticamente os \
             níveis de cortisol.",
            "<p>O estudo acompanhou 5.000 participantes durante cinco anos. Os resultados mostram \
             melhorias significativas na qualidade do sono e redução da ansiedade.</p>",
            Category::Health,
            "Deepak Chopra",
            "2024-05-16T08:00:00Z",
            "https://images.unsplash.com/photo-1506126613408-eca07ce68773",
            5,
            false,
        ),
        article(
            "16",
            "Reforma Tributária: Entenda o Que Muda no Seu Bolso",
            "O Congresso aprovou as novas alíquotas de imposto de renda e consumo. Especialistas \
             analisam os impactos.",
            "<p>A simplificação dos impostos é o principal objetivo da reforma. Produtos da cesta \
             básica terão isenção total, enquanto bens de luxo terão taxação elevada.</p>",
            Category::Politics,
            "Miriam Leitão",
            "2024-05-20T12:00:00Z",
            "https://images.unsplash.com/photo-1554224155-8303275bf6fa",
            7,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_sixteen_articles_with_sequential_ids() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 16);
        for (position, article) in catalog.iter().enumerate() {
            assert_eq!(article.id.as_str(), (position + 1).to_string());
        }
    }

    #[test]
    fn exactly_four_articles_are_featured() {
        let catalog = default_catalog();
        let featured: Vec<&str> = catalog
            .iter()
            .filter(|a| a.featured)
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(featured, ["1", "2", "8", "9"]);
    }

    #[test]
    fn image_references_are_stored_raw() {
        for article in default_catalog() {
            assert!(
                !article.image_url.contains('?'),
                "seed image should carry no delivery parameters: {}",
                article.image_url
            );
        }
    }
}
